// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_directory::AccountDirectory;
pub use contact_resolver::ContactResolver;
pub use conversation_lookup::ConversationLookup;
pub use roster_mutation_domain_service::RosterMutationDomainService;
pub use roster_session::RosterSession;
pub use roster_sync_domain_service::RosterSyncDomainService;
pub use session_accessor::SessionAccessor;

mod account_directory;
mod contact_resolver;
mod conversation_lookup;
pub mod impls;
mod roster_mutation_domain_service;
mod roster_session;
mod roster_sync_domain_service;
mod session_accessor;

#[cfg(any(test, feature = "test"))]
pub mod mocks {
    pub use super::account_directory::MockAccountDirectory;
    pub use super::contact_resolver::MockContactResolver;
    pub use super::conversation_lookup::MockConversationLookup;
    pub use super::roster_mutation_domain_service::MockRosterMutationDomainService;
    pub use super::roster_session::MockRosterSession;
    pub use super::roster_sync_domain_service::MockRosterSyncDomainService;
    pub use super::session_accessor::MockSessionAccessor;
}
