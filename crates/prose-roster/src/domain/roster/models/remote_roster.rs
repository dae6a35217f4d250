// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::ContactAddress;

/// Mirrors the `subscription` attribute of a roster item (RFC 6121 §2.1.2.5).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubscriptionType {
    #[default]
    None,
    /// The contact is subscribed to our presence.
    From,
    /// We are subscribed to the contact's presence.
    To,
    Both,
    Remove,
}

impl SubscriptionType {
    /// Returns true if we receive the contact's presence, i.e. the subscription is either
    /// outbound or mutual.
    pub fn is_subscribed(&self) -> bool {
        matches!(self, SubscriptionType::To | SubscriptionType::Both)
    }
}

/// An item of the server-side roster as exposed by a session.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteEntry {
    pub address: ContactAddress,
    pub name: Option<String>,
    pub subscription: SubscriptionType,
}

/// A server-side roster group. Membership is owned by the server and may change at any time,
/// which is why groups are never cached by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteGroup {
    pub name: String,
    pub members: Vec<ContactAddress>,
}

impl RemoteGroup {
    pub fn contains(&self, entry: &RemoteEntry) -> bool {
        self.members.contains(&entry.address)
    }
}

/// A roster `set` carrying the complete replacement state of a single item.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterItemUpdate {
    pub address: ContactAddress,
    pub name: Option<String>,
    pub groups: Vec<String>,
}
