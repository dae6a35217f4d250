// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{AccountId, ConnectionState};

/// Enumerates the configured accounts. Implemented by the account manager.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait AccountDirectory: Send + Sync {
    fn accounts(&self) -> Vec<AccountId>;
    fn connection_state(&self, account: &AccountId) -> ConnectionState;
    fn is_enabled(&self, account: &AccountId) -> bool;
}
