// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_event::AccountEvent;
pub use change_notifier::{ChangeNotifier, ChangeNotifierTrait};
#[cfg(any(test, feature = "test"))]
pub use change_notifier::MockChangeNotifierTrait;
pub use roster_event_handler::RosterEventHandler;

mod account_event;
mod change_notifier;
mod roster_event_handler;
