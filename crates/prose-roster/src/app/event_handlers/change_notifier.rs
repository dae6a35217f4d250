// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, warn};

use crate::client::ContactsChangedListener;
use crate::ClientEvent;

#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait ChangeNotifierTrait: Send + Sync {
    /// Queues `event` for delivery. Never blocks the caller.
    fn dispatch_event(&self, event: ClientEvent);
    fn add_listener(&self, listener: Arc<dyn ContactsChangedListener>);
}

type Listeners = Arc<RwLock<Vec<Arc<dyn ContactsChangedListener>>>>;

enum Message {
    Event(ClientEvent),
    Flush(oneshot::Sender<()>),
}

/// Delivers client events to listeners from a single task, one event at a time and in
/// listener registration order. Must be created inside a tokio runtime.
pub struct ChangeNotifier {
    listeners: Listeners,
    sender: mpsc::UnboundedSender<Message>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let listeners = Listeners::default();
        tokio::spawn(Self::deliver_events(receiver, listeners.clone()));
        Self { listeners, sender }
    }

    /// Waits until every event queued before this call was delivered.
    pub async fn flush(&self) {
        let (sender, receiver) = oneshot::channel();
        if self.sender.send(Message::Flush(sender)).is_err() {
            return;
        }
        _ = receiver.await;
    }

    async fn deliver_events(mut receiver: mpsc::UnboundedReceiver<Message>, listeners: Listeners) {
        while let Some(message) = receiver.recv().await {
            let event = match message {
                Message::Event(event) => event,
                Message::Flush(sender) => {
                    _ = sender.send(());
                    continue;
                }
            };

            let listeners = listeners.read().clone();
            debug!("Delivering {:?} to {} listeners.", event, listeners.len());

            for listener in listeners.iter() {
                // A panicking listener must not take down delivery to the others.
                let delivery = catch_unwind(AssertUnwindSafe(|| match &event {
                    ClientEvent::ContactsChanged { ids } => listener.contacts_changed(ids),
                    ClientEvent::OperationFailed { failure } => listener.operation_failed(failure),
                }));

                if delivery.is_err() {
                    error!("A roster listener panicked while handling {:?}.", event);
                }
            }
        }
    }
}

impl ChangeNotifierTrait for ChangeNotifier {
    fn dispatch_event(&self, event: ClientEvent) {
        if self.sender.send(Message::Event(event)).is_err() {
            warn!("Dropping client event since the notifier has shut down.");
        }
    }

    fn add_listener(&self, listener: Arc<dyn ContactsChangedListener>) {
        self.listeners.write().push(listener);
    }
}
