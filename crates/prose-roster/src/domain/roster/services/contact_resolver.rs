// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::roster::models::BestContact;
use crate::domain::shared::models::{AccountId, ContactAddress};

#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait ContactResolver: Send + Sync {
    fn resolve_best(&self, account: &AccountId, address: &ContactAddress) -> BestContact;
}
