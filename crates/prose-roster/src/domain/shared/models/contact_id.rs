// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{AccountId, ContactAddress};

/// Addresses a contact within a specific account. This is the pair handed out to listeners
/// whenever contacts change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId {
    pub account: AccountId,
    pub address: ContactAddress,
}

impl ContactId {
    pub fn new(account: AccountId, address: ContactAddress) -> Self {
        Self { account, address }
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.address, self.account)
    }
}
