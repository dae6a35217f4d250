// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use roster_cache_repository::RosterCacheRepository;

mod roster_cache_repository;

#[cfg(any(test, feature = "test"))]
pub mod mocks {
    pub use super::roster_cache_repository::MockRosterCacheRepository;
}
