// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub struct AppConfig {
    /// The maximum number of roster requests in flight at the same time.
    pub max_concurrent_remote_operations: usize,
    /// Resync the roster after each successful mutation.
    pub resync_after_mutation: bool,
    /// Keep the last known contacts of accounts without a session (marked as disconnected)
    /// instead of dropping them on resync.
    pub retain_offline_contacts: bool,
}

pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_concurrent_remote_operations: 4,
            resync_after_mutation: true,
            retain_offline_contacts: false,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(Default::default())
    }
}
