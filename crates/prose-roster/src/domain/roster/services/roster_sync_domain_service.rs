// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::shared::models::{AccountId, ContactId};

#[async_trait]
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait RosterSyncDomainService: Send + Sync {
    /// Pulls the rosters of all accounts, installs the result as a new snapshot and returns
    /// the ids of all contacts that changed.
    async fn resync(&self) -> Vec<ContactId>;

    /// Reloads rosters of connected accounts that have not been received yet and resyncs if
    /// any of them arrived or the cache was never synced.
    async fn resync_if_needed(&self);

    fn is_roster_loaded(&self, account: &AccountId) -> bool;
}
