// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::roster::models::{ContactEntry, Conversation};
use crate::domain::shared::models::{AccountId, ContactAddress};

/// The best available representation of an address, see `ContactResolver`.
#[derive(Debug, Clone, PartialEq)]
pub enum BestContact {
    Room(RoomContact),
    Roster(ContactEntry),
    Chat(ChatContact),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomContact {
    pub conversation: Conversation,
}

/// A contact that is known only through a conversation, or not at all. The latter is an
/// ephemeral placeholder which is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatContact {
    pub account: AccountId,
    pub address: ContactAddress,
    pub conversation: Option<Conversation>,
}

impl ChatContact {
    pub fn ephemeral(account: AccountId, address: ContactAddress) -> Self {
        ChatContact {
            account,
            address,
            conversation: None,
        }
    }
}

impl From<Conversation> for ChatContact {
    fn from(conversation: Conversation) -> Self {
        ChatContact {
            account: conversation.account.clone(),
            address: conversation.address.clone(),
            conversation: Some(conversation),
        }
    }
}

impl BestContact {
    pub fn account(&self) -> &AccountId {
        match self {
            BestContact::Room(room) => &room.conversation.account,
            BestContact::Roster(entry) => &entry.account,
            BestContact::Chat(chat) => &chat.account,
        }
    }

    pub fn address(&self) -> &ContactAddress {
        match self {
            BestContact::Room(room) => &room.conversation.address,
            BestContact::Roster(entry) => &entry.address,
            BestContact::Chat(chat) => &chat.address,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            BestContact::Room(room) => room
                .conversation
                .title
                .clone()
                .unwrap_or_else(|| room.conversation.address.to_string()),
            BestContact::Roster(entry) => entry.name.clone(),
            BestContact::Chat(chat) => chat.address.to_string(),
        }
    }
}
