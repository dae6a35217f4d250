// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::roster::models::{ContactEntry, RosterSnapshot};
use crate::domain::shared::models::{AccountId, ContactAddress, ContactId};

/// The in-memory source of truth for reads. Snapshots are replaced as a whole, the
/// `connected`/`enabled` flags are updated in place. A concurrent `replace_all` supersedes any
/// flag update made to the snapshot it replaces.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait RosterCacheRepository: Send + Sync {
    fn get_all(&self) -> Arc<RosterSnapshot>;
    fn get(&self, account: &AccountId, address: &ContactAddress) -> Option<ContactEntry>;

    /// Installs `snapshot` and returns the one it replaced.
    fn replace_all(&self, snapshot: RosterSnapshot) -> Arc<RosterSnapshot>;

    /// Returns the ids of the entries whose flag actually changed.
    fn set_connected(&self, account: &AccountId, connected: bool) -> Vec<ContactId>;
    fn set_enabled(&self, account: &AccountId, enabled: bool) -> Vec<ContactId>;

    /// The number of snapshots installed so far. Zero means the cache was never synced.
    fn generation(&self) -> u64;
}
