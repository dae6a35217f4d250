// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::roster::services::RosterSession;
use crate::domain::shared::models::AccountId;

/// Hands out the roster session of an account as long as its connection exists.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait SessionAccessor: Send + Sync {
    fn session_for(&self, account: &AccountId) -> Option<Arc<dyn RosterSession>>;
}
