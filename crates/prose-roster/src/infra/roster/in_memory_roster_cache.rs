// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::roster::models::{ContactEntry, RosterSnapshot};
use crate::domain::roster::repos::RosterCacheRepository;
use crate::domain::shared::models::{AccountId, ContactAddress, ContactId};

pub struct InMemoryRosterCache {
    snapshot: RwLock<Arc<RosterSnapshot>>,
    generation: AtomicU64,
}

impl InMemoryRosterCache {
    pub fn new() -> Self {
        Self {
            snapshot: Default::default(),
            generation: AtomicU64::new(0),
        }
    }
}

impl Default for InMemoryRosterCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterCacheRepository for InMemoryRosterCache {
    fn get_all(&self) -> Arc<RosterSnapshot> {
        self.snapshot.read().clone()
    }

    fn get(&self, account: &AccountId, address: &ContactAddress) -> Option<ContactEntry> {
        self.snapshot.read().get(account, address).cloned()
    }

    fn replace_all(&self, snapshot: RosterSnapshot) -> Arc<RosterSnapshot> {
        let mut guard = self.snapshot.write();
        self.generation.fetch_add(1, Ordering::SeqCst);
        std::mem::replace(&mut *guard, Arc::new(snapshot))
    }

    fn set_connected(&self, account: &AccountId, connected: bool) -> Vec<ContactId> {
        self.update_account(account, |entry| {
            if entry.connected == connected {
                return false;
            }
            entry.connected = connected;
            true
        })
    }

    fn set_enabled(&self, account: &AccountId, enabled: bool) -> Vec<ContactId> {
        self.update_account(account, |entry| {
            if entry.enabled == enabled {
                return false;
            }
            entry.enabled = enabled;
            true
        })
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

impl InMemoryRosterCache {
    /// Copies the current snapshot on write, so readers holding on to it are not affected.
    fn update_account(
        &self,
        account: &AccountId,
        mut update: impl FnMut(&mut ContactEntry) -> bool,
    ) -> Vec<ContactId> {
        let mut guard = self.snapshot.write();

        let needs_update = guard
            .entries_for(account)
            .any(|entry| update(&mut entry.clone()));
        if !needs_update {
            return vec![];
        }

        Arc::make_mut(&mut *guard).update_account(account, update)
    }
}
