// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use prose_proc_macros::DependenciesStruct;

use crate::app::deps::{DynChangeNotifier, DynSessionAccessor};
use crate::domain::roster::models::{
    ErrorSignal, OperationFailure, RemoteEntry, RosterError, RosterItemUpdate, RosterOperation,
    SessionError,
};
use crate::domain::roster::services::RosterSession;
use crate::domain::shared::models::{AccountId, ContactAddress};
use crate::ClientEvent;

use super::super::RosterMutationDomainService as RosterMutationDomainServiceTrait;

#[derive(DependenciesStruct)]
pub struct RosterMutationDomainService {
    change_notifier: DynChangeNotifier,
    session_accessor: DynSessionAccessor,
}

#[async_trait]
impl RosterMutationDomainServiceTrait for RosterMutationDomainService {
    async fn create_contact(
        &self,
        account: &AccountId,
        address: &ContactAddress,
        name: &str,
        groups: &[String],
    ) -> Result<(), RosterError> {
        skip_if_not_found(RosterOperation::CreateContact, async {
            let session = self.session(account)?;
            session
                .add_entry(address, name, groups)
                .await
                .map_err(|err| self.report(account, RosterOperation::CreateContact, err))
        })
        .await
    }

    async fn remove_contact(
        &self,
        account: &AccountId,
        address: &ContactAddress,
    ) -> Result<(), RosterError> {
        skip_if_not_found(RosterOperation::RemoveContact, async {
            let session = self.session(account)?;
            require_entry(&session, address)?;
            session
                .remove_entry(address)
                .await
                .map_err(|err| self.report(account, RosterOperation::RemoveContact, err))
        })
        .await
    }

    async fn set_name(
        &self,
        account: &AccountId,
        address: &ContactAddress,
        name: &str,
    ) -> Result<(), RosterError> {
        skip_if_not_found(RosterOperation::SetName, async {
            let session = self.session(account)?;
            require_entry(&session, address)?;
            session
                .set_entry_name(address, name.trim())
                .await
                .map_err(|err| self.report(account, RosterOperation::SetName, err))
        })
        .await
    }

    async fn set_groups(
        &self,
        account: &AccountId,
        address: &ContactAddress,
        groups: &[String],
    ) -> Result<(), RosterError> {
        skip_if_not_found(RosterOperation::SetGroups, async {
            let session = self.session(account)?;
            let entry = require_entry(&session, address)?;
            session
                .update_entry_groups(RosterItemUpdate {
                    address: entry.address,
                    name: entry.name,
                    groups: groups.to_vec(),
                })
                .await
                .map_err(|err| self.report(account, RosterOperation::SetGroups, err))
        })
        .await
    }

    async fn remove_group(&self, account: &AccountId, group: &str) -> Result<(), RosterError> {
        skip_if_not_found(RosterOperation::RemoveGroup, async {
            let session = self.session(account)?;
            let group = session.group(group).ok_or(RosterError::NotFound)?;

            let mut failed = 0;
            for member in &group.members {
                if let Err(err) = session.remove_entry_from_group(&group.name, member).await {
                    self.report(account, RosterOperation::RemoveGroup, err);
                    failed += 1;
                }
            }

            partial_result(failed, group.members.len())
        })
        .await
    }

    async fn rename_group(
        &self,
        account: &AccountId,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), RosterError> {
        if old_name == new_name {
            return Ok(());
        }

        skip_if_not_found(RosterOperation::RenameGroup, async {
            let session = self.session(account)?;

            if old_name.is_empty() {
                return self
                    .create_group_for_unfiled_entries(account, &session, new_name)
                    .await;
            }

            session.group(old_name).ok_or(RosterError::NotFound)?;
            session
                .rename_group(old_name, new_name)
                .await
                .map_err(|err| self.report(account, RosterOperation::RenameGroup, err))
        })
        .await
    }
}

impl RosterMutationDomainService {
    fn session(&self, account: &AccountId) -> Result<Arc<dyn RosterSession>, RosterError> {
        self.session_accessor
            .session_for(account)
            .ok_or(RosterError::NotFound)
    }

    /// Moves every entry that is not a member of any group into a new group `name`. Each entry
    /// is attempted even if moving another one failed.
    async fn create_group_for_unfiled_entries(
        &self,
        account: &AccountId,
        session: &Arc<dyn RosterSession>,
        name: &str,
    ) -> Result<(), RosterError> {
        let groups = session.groups();
        let unfiled_entries = session
            .entries()
            .into_iter()
            .filter(|entry| !groups.iter().any(|group| group.contains(entry)))
            .collect::<Vec<_>>();

        session
            .create_group(name)
            .await
            .map_err(|err| self.report(account, RosterOperation::RenameGroup, err))?;

        let mut failed = 0;
        for entry in &unfiled_entries {
            let update = RosterItemUpdate {
                address: entry.address.clone(),
                name: entry.name.clone(),
                groups: vec![name.to_string()],
            };

            if let Err(err) = session.update_entry_groups(update).await {
                self.report(account, RosterOperation::RenameGroup, err);
                failed += 1;
            }
        }

        partial_result(failed, unfiled_entries.len())
    }

    /// Signals `err` to listeners (unless it is an interruption) and converts it.
    fn report(
        &self,
        account: &AccountId,
        operation: RosterOperation,
        err: SessionError,
    ) -> RosterError {
        match ErrorSignal::for_failure(operation, &err) {
            Some(signal) => {
                warn!("Failed to {} in account {}. {}", operation, account, err);
                self.change_notifier
                    .dispatch_event(ClientEvent::OperationFailed {
                        failure: OperationFailure {
                            account: account.clone(),
                            operation,
                            signal,
                        },
                    });
            }
            None => error!("Interrupted while trying to {} in account {}.", operation, account),
        }
        RosterError::from(err)
    }
}

fn require_entry(
    session: &Arc<dyn RosterSession>,
    address: &ContactAddress,
) -> Result<RemoteEntry, RosterError> {
    session.entry(address).ok_or(RosterError::NotFound)
}

fn partial_result(failed: usize, attempted: usize) -> Result<(), RosterError> {
    if failed == 0 {
        return Ok(());
    }
    Err(RosterError::PartialFailure { failed, attempted })
}

async fn skip_if_not_found(
    operation: RosterOperation,
    result: impl std::future::Future<Output = Result<(), RosterError>>,
) -> Result<(), RosterError> {
    match result.await {
        Err(RosterError::NotFound) => {
            debug!("Skipping {} since the session or item does not exist.", operation);
            Ok(())
        }
        result => result,
    }
}
