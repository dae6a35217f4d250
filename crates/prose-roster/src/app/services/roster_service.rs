// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::sync::Arc;

use tracing::{info, warn};

use prose_proc_macros::InjectDependencies;

use crate::app::deps::*;
use crate::client::ContactsChangedListener;
use crate::domain::roster::models::{
    BestContact, ContactEntry, Presence, RosterError, RosterSnapshot,
};
use crate::domain::shared::models::{AccountId, ContactAddress, ContactId};

#[derive(InjectDependencies)]
pub struct RosterService {
    #[inject]
    account_directory: DynAccountDirectory,
    #[inject]
    change_notifier: DynChangeNotifier,
    #[inject]
    contact_resolver: DynContactResolver,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    roster_cache: DynRosterCacheRepository,
    #[inject]
    roster_mutation_domain_service: DynRosterMutationDomainService,
    #[inject]
    roster_sync_domain_service: DynRosterSyncDomainService,
    #[inject]
    session_accessor: DynSessionAccessor,
    #[inject]
    task_pool: DynTaskPool,
}

impl RosterService {
    /// Returns all contacts of all accounts. Rosters that were not received yet are requested
    /// first.
    pub async fn get_all_contacts(&self) -> Arc<RosterSnapshot> {
        let sync_service = self.roster_sync_domain_service.clone();
        if let Err(err) = self
            .task_pool
            .run(async move { sync_service.resync_if_needed().await })
            .await
        {
            warn!("Failed to refresh roster before reading it. {}", err);
        }
        self.roster_cache.get_all()
    }

    pub fn get_contact(&self, account: &AccountId, address: &ContactAddress) -> Option<ContactEntry> {
        self.roster_cache.get(account, address)
    }

    pub fn get_best_contact(&self, account: &AccountId, address: &ContactAddress) -> BestContact {
        self.contact_resolver.resolve_best(account, address)
    }

    pub fn get_groups_for_account(&self, account: &AccountId) -> Vec<String> {
        self.roster_cache.get_all().group_names(account)
    }

    pub fn get_groups_for_contact(
        &self,
        account: &AccountId,
        address: &ContactAddress,
    ) -> Vec<String> {
        self.get_contact(account, address)
            .map(|entry| entry.groups.into_iter().collect())
            .unwrap_or_default()
    }

    pub fn get_display_name(&self, account: &AccountId, address: &ContactAddress) -> String {
        self.get_contact(account, address)
            .map(|entry| entry.name)
            .unwrap_or_else(|| address.to_string())
    }

    pub fn get_presence(&self, account: &AccountId, address: &ContactAddress) -> Option<Presence> {
        self.session_accessor
            .session_for(account)?
            .presence_for(address)
    }

    pub fn get_presences(&self, account: &AccountId, address: &ContactAddress) -> Vec<Presence> {
        self.session_accessor
            .session_for(account)
            .map(|session| session.available_presences(address))
            .unwrap_or_default()
    }

    pub fn is_roster_loaded(&self, account: &AccountId) -> bool {
        self.roster_sync_domain_service.is_roster_loaded(account)
    }

    pub fn add_contacts_changed_listener(&self, listener: Arc<dyn ContactsChangedListener>) {
        self.change_notifier.add_listener(listener)
    }

    pub async fn resync(&self) -> Result<Vec<ContactId>, RosterError> {
        let sync_service = self.roster_sync_domain_service.clone();
        self.task_pool
            .run(async move { sync_service.resync().await })
            .await
    }
}

impl RosterService {
    pub async fn create_contact(
        &self,
        account: &AccountId,
        address: &ContactAddress,
        name: impl Into<String>,
        groups: Vec<String>,
    ) -> Result<(), RosterError> {
        let (account, address, name) = (account.clone(), address.clone(), name.into());
        self.mutate(move |service| async move {
            service
                .create_contact(&account, &address, &name, &groups)
                .await
        })
        .await
    }

    pub async fn remove_contact(
        &self,
        account: &AccountId,
        address: &ContactAddress,
    ) -> Result<(), RosterError> {
        let (account, address) = (account.clone(), address.clone());
        self.mutate(move |service| async move { service.remove_contact(&account, &address).await })
            .await
    }

    pub async fn set_name(
        &self,
        account: &AccountId,
        address: &ContactAddress,
        name: impl Into<String>,
    ) -> Result<(), RosterError> {
        let (account, address, name) = (account.clone(), address.clone(), name.into());
        self.mutate(move |service| async move { service.set_name(&account, &address, &name).await })
            .await
    }

    pub async fn set_groups(
        &self,
        account: &AccountId,
        address: &ContactAddress,
        groups: Vec<String>,
    ) -> Result<(), RosterError> {
        let (account, address) = (account.clone(), address.clone());
        self.mutate(move |service| async move {
            service.set_groups(&account, &address, &groups).await
        })
        .await
    }

    pub async fn remove_group(&self, account: &AccountId, group: &str) -> Result<(), RosterError> {
        let (account, group) = (account.clone(), group.to_string());
        self.mutate(move |service| async move { service.remove_group(&account, &group).await })
            .await
    }

    /// Removes `group` in every account. Failures are signalled per account.
    pub async fn remove_group_from_all_accounts(&self, group: &str) {
        for account in self.account_directory.accounts() {
            if let Err(err) = self.remove_group(&account, group).await {
                info!("Failed to remove group '{}' in account {}. {}", group, account, err);
            }
        }
    }

    /// Pass an empty `old_name` to move all contacts without a group into `new_name`.
    pub async fn rename_group(
        &self,
        account: &AccountId,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), RosterError> {
        if old_name == new_name {
            return Ok(());
        }

        let (account, old_name, new_name) =
            (account.clone(), old_name.to_string(), new_name.to_string());
        self.mutate(move |service| async move {
            service.rename_group(&account, &old_name, &new_name).await
        })
        .await
    }

    /// Renames `old_name` in every account. Failures are signalled per account.
    pub async fn rename_group_in_all_accounts(&self, old_name: &str, new_name: &str) {
        for account in self.account_directory.accounts() {
            if let Err(err) = self.rename_group(&account, old_name, new_name).await {
                info!(
                    "Failed to rename group '{}' in account {}. {}",
                    old_name, account, err
                );
            }
        }
    }
}

impl RosterService {
    /// Runs a mutation on the task pool and resyncs after the server applied at least part of
    /// it (if configured). The mutation's own error takes precedence over a failed resync.
    async fn mutate<F, Fut>(&self, mutation: F) -> Result<(), RosterError>
    where
        F: FnOnce(DynRosterMutationDomainService) -> Fut,
        Fut: Future<Output = Result<(), RosterError>> + Send + 'static,
    {
        let service = self.roster_mutation_domain_service.clone();
        let result = self.task_pool.run(mutation(service)).await?;

        let applied = match &result {
            Ok(()) => true,
            Err(RosterError::PartialFailure { failed, attempted }) => failed < attempted,
            Err(_) => false,
        };

        if applied && self.ctx.config.resync_after_mutation {
            let resynced = self.resync().await;
            result?;
            resynced?;
            return Ok(());
        }
        result
    }
}
