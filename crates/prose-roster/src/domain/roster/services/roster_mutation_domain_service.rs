// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::roster::models::RosterError;
use crate::domain::shared::models::{AccountId, ContactAddress};

/// Performs roster changes against the remote session of an account. A missing session or
/// roster item turns an operation into a no-op that returns `Ok(())`. Every other failure is
/// signalled to listeners and returned.
#[async_trait]
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait RosterMutationDomainService: Send + Sync {
    async fn create_contact(
        &self,
        account: &AccountId,
        address: &ContactAddress,
        name: &str,
        groups: &[String],
    ) -> Result<(), RosterError>;
    async fn remove_contact(
        &self,
        account: &AccountId,
        address: &ContactAddress,
    ) -> Result<(), RosterError>;
    async fn set_name(
        &self,
        account: &AccountId,
        address: &ContactAddress,
        name: &str,
    ) -> Result<(), RosterError>;
    async fn set_groups(
        &self,
        account: &AccountId,
        address: &ContactAddress,
        groups: &[String],
    ) -> Result<(), RosterError>;
    /// Removes every member from `group`. All members are attempted even if some fail.
    async fn remove_group(&self, account: &AccountId, group: &str) -> Result<(), RosterError>;
    /// An empty `old_name` addresses the unfiled entries, which are moved into a new group.
    async fn rename_group(
        &self,
        account: &AccountId,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), RosterError>;
}
