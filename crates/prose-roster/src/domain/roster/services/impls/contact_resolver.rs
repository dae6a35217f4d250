// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use prose_proc_macros::DependenciesStruct;

use crate::app::deps::{DynConversationLookup, DynRosterCacheRepository};
use crate::domain::roster::models::{BestContact, ChatContact, RoomContact};
use crate::domain::shared::models::{AccountId, ContactAddress};

use super::super::ContactResolver as ContactResolverTrait;

#[derive(DependenciesStruct)]
pub struct ContactResolver {
    conversation_lookup: DynConversationLookup,
    roster_cache: DynRosterCacheRepository,
}

impl ContactResolverTrait for ContactResolver {
    /// Rooms win over (possibly stale) roster entries, roster entries win over plain chats and
    /// an existing chat wins over an ephemeral placeholder.
    fn resolve_best(&self, account: &AccountId, address: &ContactAddress) -> BestContact {
        let conversation = self.conversation_lookup.find_conversation(account, address);

        if let Some(conversation) = conversation.as_ref().filter(|c| c.is_room()) {
            return BestContact::Room(RoomContact {
                conversation: conversation.clone(),
            });
        }

        if let Some(entry) = self.roster_cache.get(account, address) {
            return BestContact::Roster(entry);
        }

        match conversation {
            Some(conversation) => BestContact::Chat(ChatContact::from(conversation)),
            None => BestContact::Chat(ChatContact::ephemeral(account.clone(), address.clone())),
        }
    }
}
