// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::AccountId;

/// Lifecycle events reported by the account manager.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountEvent {
    /// The account's session is authenticated and usable.
    Connected { account: AccountId },
    /// The account lost its connection.
    Disconnected { account: AccountId },
    Enabled { account: AccountId },
    Disabled { account: AccountId },
    /// The server pushed a change to the account's roster.
    RosterPushed { account: AccountId },
}
