// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use best_contact::{BestContact, ChatContact, RoomContact};
pub use contact_entry::{ContactEntry, GroupReference};
pub use conversation::{Conversation, ConversationKind};
pub use errors::{ErrorSignal, OperationFailure, RosterError, RosterOperation, SessionError};
pub use presence::{Availability, Presence};
pub use remote_roster::{RemoteEntry, RemoteGroup, RosterItemUpdate, SubscriptionType};
pub use roster_snapshot::{Group, RosterSnapshot};

mod best_contact;
mod contact_entry;
mod conversation;
mod errors;
mod presence;
mod remote_roster;
mod roster_snapshot;
