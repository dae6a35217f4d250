// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{info, warn};

use prose_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAccountDirectory, DynAppContext, DynChangeNotifier, DynRosterCacheRepository,
    DynSessionAccessor,
};
use crate::domain::roster::models::{ContactEntry, RosterSnapshot, SessionError};
use crate::domain::shared::models::{AccountId, ConnectionState, ContactId};
use crate::ClientEvent;

use super::super::RosterSyncDomainService as RosterSyncDomainServiceTrait;

#[derive(DependenciesStruct)]
pub struct RosterSyncDomainService {
    account_directory: DynAccountDirectory,
    change_notifier: DynChangeNotifier,
    ctx: DynAppContext,
    roster_cache: DynRosterCacheRepository,
    session_accessor: DynSessionAccessor,
}

#[async_trait]
impl RosterSyncDomainServiceTrait for RosterSyncDomainService {
    async fn resync(&self) -> Vec<ContactId> {
        self.rebuild(&HashSet::new()).await
    }

    async fn resync_if_needed(&self) {
        let mut needs_resync = self.roster_cache.generation() == 0;
        let mut failed_reloads = HashSet::new();

        for account in self.account_directory.accounts() {
            match self.reload_roster_if_needed(&account).await {
                Ok(true) => needs_resync = true,
                Ok(false) => (),
                Err(_) => {
                    failed_reloads.insert(account);
                }
            }
        }

        if needs_resync {
            self.rebuild(&failed_reloads).await;
        }
    }

    fn is_roster_loaded(&self, account: &AccountId) -> bool {
        self.session_accessor
            .session_for(account)
            .map(|session| session.is_roster_loaded())
            .unwrap_or(false)
    }
}

impl RosterSyncDomainService {
    /// Pulls all accounts and installs the result. Accounts in `failed_reloads` already failed
    /// to reload their roster in this pass and contribute nothing.
    async fn rebuild(&self, failed_reloads: &HashSet<AccountId>) -> Vec<ContactId> {
        let accounts = self.account_directory.accounts();
        let previous = self.roster_cache.get_all();

        // All accounts need to be pulled before the snapshot can be installed.
        let entries = join_all(accounts.iter().map(|account| {
            self.pull_contacts(account, &previous, failed_reloads.contains(account))
        }))
        .await
        .into_iter()
        .flatten();

        let previous = self.roster_cache.replace_all(RosterSnapshot::new(entries));
        let current = self.roster_cache.get_all();
        let changed_ids = previous.changed_ids(&current);

        info!(
            "Resynced roster with {} contacts in {} accounts ({} changed).",
            current.len(),
            accounts.len(),
            changed_ids.len()
        );

        if !changed_ids.is_empty() {
            self.change_notifier
                .dispatch_event(ClientEvent::ContactsChanged {
                    ids: changed_ids.clone(),
                });
        }

        changed_ids
    }

    /// Returns true if the roster was reloaded, false if there was nothing to reload.
    async fn reload_roster_if_needed(&self, account: &AccountId) -> Result<bool, SessionError> {
        let Some(session) = self.session_accessor.session_for(account) else {
            return Ok(false);
        };

        if session.is_roster_loaded()
            || self.account_directory.connection_state(account) != ConnectionState::Connected
        {
            return Ok(false);
        }

        session.reload().await.map(|_| true).map_err(|err| {
            warn!("Failed to reload roster of {}. {}", account, err);
            err
        })
    }

    async fn pull_contacts(
        &self,
        account: &AccountId,
        previous: &RosterSnapshot,
        reload_failed: bool,
    ) -> Vec<ContactEntry> {
        let enabled = self.account_directory.is_enabled(account);

        let Some(session) = self.session_accessor.session_for(account) else {
            if !self.ctx.config.retain_offline_contacts {
                return vec![];
            }

            return previous
                .entries_for(account)
                .cloned()
                .map(|mut entry| {
                    entry.connected = false;
                    entry.enabled = enabled;
                    entry
                })
                .collect();
        };

        if reload_failed || self.reload_roster_if_needed(account).await.is_err() {
            return vec![];
        }

        let connected =
            self.account_directory.connection_state(account) == ConnectionState::Connected;
        let groups = session.groups();

        session
            .entries()
            .iter()
            .map(|entry| ContactEntry::from_remote_entry(account, entry, &groups, connected, enabled))
            .collect()
    }
}
