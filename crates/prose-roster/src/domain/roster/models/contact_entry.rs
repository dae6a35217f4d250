// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::roster::models::{RemoteEntry, RemoteGroup};
use crate::domain::shared::models::{AccountId, ContactAddress, ContactId};

/// The cached state of a single roster contact. Every entry belongs to exactly one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub account: AccountId,
    pub address: ContactAddress,
    /// Falls back to the address if the roster item carries no name.
    pub name: String,
    pub groups: BTreeSet<String>,
    /// True if we receive the contact's presence (subscription `to` or `both`).
    pub subscribed: bool,
    /// Mirrors whether the owning account's session is live.
    pub connected: bool,
    /// Mirrors whether the owning account is enabled.
    pub enabled: bool,
}

/// A lightweight handle to a group of an account. Resolve it against a `RosterSnapshot`
/// whenever you need its members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupReference {
    pub account: AccountId,
    pub name: String,
}

impl ContactEntry {
    pub fn from_remote_entry(
        account: &AccountId,
        entry: &RemoteEntry,
        remote_groups: &[RemoteGroup],
        connected: bool,
        enabled: bool,
    ) -> Self {
        let name = entry
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .unwrap_or_else(|| entry.address.to_string());

        let groups = remote_groups
            .iter()
            .filter(|group| group.contains(entry))
            .map(|group| group.name.clone())
            .collect();

        ContactEntry {
            account: account.clone(),
            address: entry.address.clone(),
            name,
            groups,
            subscribed: entry.subscription.is_subscribed(),
            connected,
            enabled,
        }
    }

    pub fn id(&self) -> ContactId {
        ContactId::new(self.account.clone(), self.address.clone())
    }

    /// Returns true if the entry belongs to no group.
    pub fn is_unfiled(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_references(&self) -> Vec<GroupReference> {
        self.groups
            .iter()
            .map(|name| GroupReference {
                account: self.account.clone(),
                name: name.clone(),
            })
            .collect()
    }
}
