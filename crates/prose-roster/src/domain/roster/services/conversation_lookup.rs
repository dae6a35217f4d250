// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::roster::models::Conversation;
use crate::domain::shared::models::{AccountId, ContactAddress};

#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait ConversationLookup: Send + Sync {
    fn find_conversation(
        &self,
        account: &AccountId,
        address: &ContactAddress,
    ) -> Option<Conversation>;
}
