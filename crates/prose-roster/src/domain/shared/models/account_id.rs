// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use jid::BareJid;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifies one configured account by the bare JID it logs in with.
pub struct AccountId(BareJid);

impl AccountId {
    pub fn into_inner(self) -> BareJid {
        self.0
    }
}

impl From<BareJid> for AccountId {
    fn from(value: BareJid) -> Self {
        AccountId(value)
    }
}

impl FromStr for AccountId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AccountId(s.parse::<BareJid>()?))
    }
}

impl AsRef<BareJid> for AccountId {
    fn as_ref(&self) -> &BareJid {
        &self.0
    }
}

impl Debug for AccountId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccountId({})", self.0)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
