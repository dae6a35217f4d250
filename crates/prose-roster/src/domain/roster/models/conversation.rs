// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{AccountId, ContactAddress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationKind {
    /// A one-to-one chat.
    Chat,
    /// A multi-user chat room (XEP-0045).
    Room,
}

/// An open conversation as reported by the messaging layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub account: AccountId,
    pub address: ContactAddress,
    pub kind: ConversationKind,
    pub title: Option<String>,
}

impl Conversation {
    pub fn is_room(&self) -> bool {
        self.kind == ConversationKind::Room
    }
}
