// prose-core-client/prose-roster-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use prose_roster::dtos::{AccountId, ConnectionState};
use prose_roster::test::{
    InMemoryConversationLookup, InMemorySession, RecordingListener, StaticAccountDirectory,
    StaticSessionAccessor,
};
use prose_roster::{AppConfig, Client};

/// A client wired to in-memory accounts. Every account starts out connected.
pub struct TestClient {
    pub client: Client,
    pub accounts: Arc<StaticAccountDirectory>,
    pub sessions: Arc<StaticSessionAccessor>,
    pub conversations: Arc<InMemoryConversationLookup>,
    pub listener: Arc<RecordingListener>,
}

impl TestClient {
    pub fn new(accounts: &[AccountId]) -> Self {
        Self::with_config(accounts, AppConfig::default())
    }

    pub fn with_config(accounts: &[AccountId], config: AppConfig) -> Self {
        let account_directory = Arc::new(StaticAccountDirectory::new(
            accounts
                .iter()
                .cloned()
                .map(|account| (account, ConnectionState::Connected)),
        ));
        let sessions = Arc::new(StaticSessionAccessor::default());
        let conversations = Arc::new(InMemoryConversationLookup::default());
        let listener = Arc::new(RecordingListener::default());

        let client = Client::builder()
            .set_account_directory(account_directory.clone())
            .set_session_accessor(sessions.clone())
            .set_conversation_lookup(conversations.clone())
            .set_config(config)
            .add_listener(listener.clone())
            .build();

        TestClient {
            client,
            accounts: account_directory,
            sessions,
            conversations,
            listener,
        }
    }

    /// Installs `session` for `account` and returns it for inspection.
    pub fn connect(&self, account: &AccountId, session: InMemorySession) -> Arc<InMemorySession> {
        let session = Arc::new(session);
        self.sessions.insert(account.clone(), session.clone());
        session
    }
}
