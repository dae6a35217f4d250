// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::AppConfig;
pub use app::event_handlers::AccountEvent;
pub use client::{Client, ContactsChangedListener};
pub use client_event::ClientEvent;


pub mod app;
mod client;
mod client_builder;
mod client_event;

pub mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;

pub mod dtos {
    pub use crate::domain::roster::models::{
        Availability, BestContact, ChatContact, ContactEntry, Conversation, ConversationKind,
        ErrorSignal, Group, GroupReference, OperationFailure, Presence, RemoteEntry, RemoteGroup,
        RoomContact, RosterError, RosterItemUpdate, RosterOperation, RosterSnapshot,
        SessionError, SubscriptionType,
    };
    pub use crate::domain::shared::models::{
        AccountId, ConnectionState, ContactAddress, ContactId,
    };
}

pub mod services {
    pub use crate::app::services::RosterService;
}

/// Conversions between `xmpp_parsers` roster payloads and the roster models, for sessions
/// backed by an XMPP connection.
pub mod xmpp {
    pub use crate::infra::xmpp::type_conversions::remote_groups;
}
