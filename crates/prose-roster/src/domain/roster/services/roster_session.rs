// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::roster::models::{
    Presence, RemoteEntry, RemoteGroup, RosterItemUpdate, SessionError,
};
use crate::domain::shared::models::ContactAddress;

/// The remote roster of one authenticated session. Reads are served from the session's local
/// copy of the server roster, every async method performs a network round-trip.
#[async_trait]
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait RosterSession: Send + Sync {
    /// Whether the initial roster was received from the server.
    fn is_roster_loaded(&self) -> bool;
    async fn reload(&self) -> Result<(), SessionError>;

    fn entries(&self) -> Vec<RemoteEntry>;
    fn entry(&self, address: &ContactAddress) -> Option<RemoteEntry>;
    fn groups(&self) -> Vec<RemoteGroup>;
    fn group(&self, name: &str) -> Option<RemoteGroup>;

    fn presence_for(&self, address: &ContactAddress) -> Option<Presence>;
    fn available_presences(&self, address: &ContactAddress) -> Vec<Presence>;

    async fn add_entry(
        &self,
        address: &ContactAddress,
        name: &str,
        groups: &[String],
    ) -> Result<(), SessionError>;
    async fn remove_entry(&self, address: &ContactAddress) -> Result<(), SessionError>;
    async fn set_entry_name(&self, address: &ContactAddress, name: &str)
        -> Result<(), SessionError>;
    /// Sends a roster `set` replacing the item's name and groups.
    async fn update_entry_groups(&self, update: RosterItemUpdate) -> Result<(), SessionError>;
    async fn create_group(&self, name: &str) -> Result<(), SessionError>;
    async fn rename_group(&self, old_name: &str, new_name: &str) -> Result<(), SessionError>;
    async fn remove_entry_from_group(
        &self,
        group: &str,
        address: &ContactAddress,
    ) -> Result<(), SessionError>;
}
