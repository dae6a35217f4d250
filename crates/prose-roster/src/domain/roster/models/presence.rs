// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Availability {
    Available,
    Chat,
    Away,
    ExtendedAway,
    DoNotDisturb,
    #[default]
    Unavailable,
}

/// The last presence received from one resource of a contact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presence {
    pub resource: Option<String>,
    pub availability: Availability,
    pub priority: i8,
    pub status: Option<String>,
}
