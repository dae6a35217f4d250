// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use jid::{BareJid, Jid};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// The bare address of a remote contact. Equality follows the normalization rules of the
/// `jid` crate.
pub struct ContactAddress(BareJid);

impl ContactAddress {
    pub fn into_inner(self) -> BareJid {
        self.0
    }

    /// Strips the resource from a full JID, if there is one.
    pub fn from_jid(jid: &Jid) -> Self {
        ContactAddress(jid.to_bare())
    }
}

impl From<BareJid> for ContactAddress {
    fn from(value: BareJid) -> Self {
        ContactAddress(value)
    }
}

impl FromStr for ContactAddress {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ContactAddress(s.parse::<BareJid>()?))
    }
}

impl AsRef<BareJid> for ContactAddress {
    fn as_ref(&self) -> &BareJid {
        &self.0
    }
}

impl Debug for ContactAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ContactAddress({})", self.0)
    }
}

impl Display for ContactAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
