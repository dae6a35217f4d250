// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::info;

use prose_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynChangeNotifier, DynRosterCacheRepository, DynRosterSyncDomainService, DynTaskPool,
};
use crate::app::event_handlers::AccountEvent;
use crate::domain::shared::models::ContactId;
use crate::ClientEvent;

/// Keeps the roster cache in line with the lifecycle of the accounts.
#[derive(InjectDependencies)]
pub struct RosterEventHandler {
    #[inject]
    change_notifier: DynChangeNotifier,
    #[inject]
    roster_cache: DynRosterCacheRepository,
    #[inject]
    roster_sync_domain_service: DynRosterSyncDomainService,
    #[inject]
    task_pool: DynTaskPool,
}

impl RosterEventHandler {
    pub fn name(&self) -> &'static str {
        "roster"
    }

    pub async fn handle_event(&self, event: AccountEvent) -> Result<()> {
        match event {
            AccountEvent::Connected { account } | AccountEvent::RosterPushed { account } => {
                info!("Resyncing roster after update of account {}.", account);
                let sync_service = self.roster_sync_domain_service.clone();
                self.task_pool
                    .run(async move { sync_service.resync().await })
                    .await?;
            }
            AccountEvent::Disconnected { account } => {
                let ids = self.roster_cache.set_connected(&account, false);
                self.publish(ids);
            }
            AccountEvent::Enabled { account } => {
                let ids = self.roster_cache.set_enabled(&account, true);
                self.publish(ids);
            }
            AccountEvent::Disabled { account } => {
                let ids = self.roster_cache.set_enabled(&account, false);
                self.publish(ids);
            }
        }

        Ok(())
    }

    fn publish(&self, ids: Vec<ContactId>) {
        if ids.is_empty() {
            return;
        }
        self.change_notifier
            .dispatch_event(ClientEvent::ContactsChanged { ids })
    }
}
