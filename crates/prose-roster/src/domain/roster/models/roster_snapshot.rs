// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use crate::domain::roster::models::{ContactEntry, GroupReference};
use crate::domain::shared::models::{AccountId, ContactAddress, ContactId};

type GroupIndex = IndexMap<String, IndexSet<ContactAddress>>;

/// An immutable view of all contacts across all accounts. Snapshots are built in one go and
/// then published as a whole so that readers never observe a half-synced roster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterSnapshot {
    entries: IndexMap<ContactId, ContactEntry>,
    groups: HashMap<AccountId, GroupIndex>,
}

/// A group resolved from a `GroupReference`.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub account: AccountId,
    pub name: String,
    pub members: IndexSet<ContactAddress>,
}

impl RosterSnapshot {
    /// Builds a snapshot from `entries`. If an (account, address) pair occurs more than once
    /// the last occurrence wins.
    pub fn new(entries: impl IntoIterator<Item = ContactEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.id(), entry))
            .collect::<IndexMap<_, _>>();

        let mut groups = HashMap::<AccountId, GroupIndex>::new();
        for entry in entries.values() {
            let index = groups.entry(entry.account.clone()).or_default();
            for group in &entry.groups {
                index
                    .entry(group.clone())
                    .or_default()
                    .insert(entry.address.clone());
            }
        }

        Self { entries, groups }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ContactEntry> {
        self.entries.values()
    }

    pub fn entries_for<'a>(
        &'a self,
        account: &'a AccountId,
    ) -> impl Iterator<Item = &'a ContactEntry> + 'a {
        self.entries
            .values()
            .filter(move |entry| &entry.account == account)
    }

    pub fn get(&self, account: &AccountId, address: &ContactAddress) -> Option<&ContactEntry> {
        self.entries
            .get(&ContactId::new(account.clone(), address.clone()))
    }

    /// Returns the names of the groups of `account` in alphabetical order.
    pub fn group_names(&self, account: &AccountId) -> Vec<String> {
        self.groups
            .get(account)
            .map(|index| index.keys().cloned().sorted().collect())
            .unwrap_or_default()
    }

    pub fn group(&self, reference: &GroupReference) -> Option<Group> {
        let members = self.groups.get(&reference.account)?.get(&reference.name)?;
        Some(Group {
            account: reference.account.clone(),
            name: reference.name.clone(),
            members: members.clone(),
        })
    }

    /// Applies `update` to every entry of `account` and returns the ids of the entries for
    /// which `update` reported a change. Must not touch the groups of an entry.
    pub fn update_account(
        &mut self,
        account: &AccountId,
        mut update: impl FnMut(&mut ContactEntry) -> bool,
    ) -> Vec<ContactId> {
        self.entries
            .iter_mut()
            .filter(|(id, _)| &id.account == account)
            .filter_map(|(id, entry)| update(entry).then(|| id.clone()))
            .collect()
    }

    /// Returns the ids of all contacts that were added, removed or modified in `other`
    /// compared to `self`.
    pub fn changed_ids(&self, other: &RosterSnapshot) -> Vec<ContactId> {
        let modified_or_removed = self
            .entries
            .iter()
            .filter(|(id, entry)| other.entries.get(*id) != Some(*entry))
            .map(|(id, _)| id.clone());

        let added = other
            .entries
            .keys()
            .filter(|id| !self.entries.contains_key(*id))
            .cloned();

        modified_or_removed.chain(added).collect()
    }
}
