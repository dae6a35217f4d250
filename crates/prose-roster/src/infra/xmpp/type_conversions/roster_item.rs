// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexMap;
use xmpp_parsers::roster::{Group, Item, Roster, Subscription};

use crate::domain::roster::models::{
    RemoteEntry, RemoteGroup, RosterItemUpdate, SubscriptionType,
};
use crate::domain::shared::models::ContactAddress;

impl From<Subscription> for SubscriptionType {
    fn from(value: Subscription) -> Self {
        match value {
            Subscription::None => SubscriptionType::None,
            Subscription::From => SubscriptionType::From,
            Subscription::To => SubscriptionType::To,
            Subscription::Both => SubscriptionType::Both,
            Subscription::Remove => SubscriptionType::Remove,
        }
    }
}

impl From<&Item> for RemoteEntry {
    fn from(item: &Item) -> Self {
        RemoteEntry {
            address: ContactAddress::from(item.jid.clone()),
            name: item.name.clone(),
            subscription: item.subscription.clone().into(),
        }
    }
}

impl From<RosterItemUpdate> for Roster {
    fn from(value: RosterItemUpdate) -> Self {
        Roster {
            ver: None,
            items: vec![Item {
                jid: value.address.into_inner(),
                name: value.name,
                subscription: Default::default(),
                ask: Default::default(),
                groups: value.groups.into_iter().map(Group).collect(),
            }],
        }
    }
}

/// XMPP has no standalone group objects, a group exists as long as one item names it. This
/// collects the groups in the order in which they are first mentioned.
pub fn remote_groups(items: &[Item]) -> Vec<RemoteGroup> {
    let mut groups = IndexMap::<String, Vec<ContactAddress>>::new();

    for item in items {
        for Group(name) in &item.groups {
            groups
                .entry(name.clone())
                .or_default()
                .push(ContactAddress::from(item.jid.clone()));
        }
    }

    groups
        .into_iter()
        .map(|(name, members)| RemoteGroup { name, members })
        .collect()
}
