// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use tracing::error;

use crate::app::event_handlers::{AccountEvent, ChangeNotifier, RosterEventHandler};
use crate::app::services::RosterService;
use crate::client_builder::{
    ClientBuilder, UndefinedAccountDirectory, UndefinedConversationLookup,
    UndefinedSessionAccessor,
};
use crate::domain::roster::models::OperationFailure;
use crate::domain::shared::models::ContactId;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

/// Receives roster notifications. Callbacks are made from a single task, one event at a time.
pub trait ContactsChangedListener: Send + Sync {
    fn contacts_changed(&self, ids: &[ContactId]);

    fn operation_failed(&self, _failure: &OperationFailure) {}
}

impl Client {
    pub fn builder(
    ) -> ClientBuilder<UndefinedAccountDirectory, UndefinedSessionAccessor, UndefinedConversationLookup>
    {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub roster: RosterService,
    pub(crate) change_notifier: Arc<ChangeNotifier>,
    pub(crate) roster_event_handler: RosterEventHandler,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    /// Feeds a lifecycle event from the account manager into the roster.
    pub async fn handle_account_event(&self, event: AccountEvent) {
        let handler = &self.roster_event_handler;
        if let Err(err) = handler.handle_event(event).await {
            error!(
                "Event handler '{}' aborted with error: {}",
                handler.name(),
                err
            );
        }
    }

    /// Waits until all queued notifications were delivered to the listeners.
    pub async fn flush_events(&self) {
        self.change_notifier.flush().await
    }
}
