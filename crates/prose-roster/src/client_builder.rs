// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynAccountDirectory, DynConversationLookup,
    DynSessionAccessor,
};
use crate::app::event_handlers::{ChangeNotifier, ChangeNotifierTrait, RosterEventHandler};
use crate::app::services::RosterService;
use crate::client::ClientInner;
use crate::domain::roster::services::impls::{
    ContactResolver, ContactResolverDependencies, RosterMutationDomainService,
    RosterMutationDomainServiceDependencies, RosterSyncDomainService,
    RosterSyncDomainServiceDependencies,
};
use crate::infra::general::TaskPool;
use crate::infra::roster::InMemoryRosterCache;
use crate::{Client, ContactsChangedListener};

pub struct UndefinedAccountDirectory;
pub struct UndefinedSessionAccessor;
pub struct UndefinedConversationLookup;

pub struct ClientBuilder<A, S, C> {
    account_directory: A,
    app_config: AppConfig,
    conversation_lookup: C,
    listeners: Vec<Arc<dyn ContactsChangedListener>>,
    session_accessor: S,
}

impl ClientBuilder<UndefinedAccountDirectory, UndefinedSessionAccessor, UndefinedConversationLookup> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            account_directory: UndefinedAccountDirectory,
            app_config: Default::default(),
            conversation_lookup: UndefinedConversationLookup,
            listeners: vec![],
            session_accessor: UndefinedSessionAccessor,
        }
    }
}

impl<S, C> ClientBuilder<UndefinedAccountDirectory, S, C> {
    pub fn set_account_directory(
        self,
        account_directory: DynAccountDirectory,
    ) -> ClientBuilder<DynAccountDirectory, S, C> {
        ClientBuilder {
            account_directory,
            app_config: self.app_config,
            conversation_lookup: self.conversation_lookup,
            listeners: self.listeners,
            session_accessor: self.session_accessor,
        }
    }
}

impl<A, C> ClientBuilder<A, UndefinedSessionAccessor, C> {
    pub fn set_session_accessor(
        self,
        session_accessor: DynSessionAccessor,
    ) -> ClientBuilder<A, DynSessionAccessor, C> {
        ClientBuilder {
            account_directory: self.account_directory,
            app_config: self.app_config,
            conversation_lookup: self.conversation_lookup,
            listeners: self.listeners,
            session_accessor,
        }
    }
}

impl<A, S> ClientBuilder<A, S, UndefinedConversationLookup> {
    pub fn set_conversation_lookup(
        self,
        conversation_lookup: DynConversationLookup,
    ) -> ClientBuilder<A, S, DynConversationLookup> {
        ClientBuilder {
            account_directory: self.account_directory,
            app_config: self.app_config,
            conversation_lookup,
            listeners: self.listeners,
            session_accessor: self.session_accessor,
        }
    }
}

impl<A, S, C> ClientBuilder<A, S, C> {
    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn add_listener(mut self, listener: Arc<dyn ContactsChangedListener>) -> Self {
        self.listeners.push(listener);
        self
    }
}

impl ClientBuilder<DynAccountDirectory, DynSessionAccessor, DynConversationLookup> {
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Client {
        let ctx = Arc::new(AppContext::new(self.app_config));
        let task_pool = Arc::new(TaskPool::new(
            ctx.config.max_concurrent_remote_operations,
        ));
        let roster_cache = Arc::new(InMemoryRosterCache::new());

        let change_notifier = Arc::new(ChangeNotifier::new());
        for listener in self.listeners {
            change_notifier.add_listener(listener);
        }

        let roster_sync_domain_service =
            Arc::new(RosterSyncDomainService::from(RosterSyncDomainServiceDependencies {
                account_directory: self.account_directory.clone(),
                change_notifier: change_notifier.clone(),
                ctx: ctx.clone(),
                roster_cache: roster_cache.clone(),
                session_accessor: self.session_accessor.clone(),
            }));

        let roster_mutation_domain_service = Arc::new(RosterMutationDomainService::from(
            RosterMutationDomainServiceDependencies {
                change_notifier: change_notifier.clone(),
                session_accessor: self.session_accessor.clone(),
            },
        ));

        let contact_resolver = Arc::new(ContactResolver::from(ContactResolverDependencies {
            conversation_lookup: self.conversation_lookup,
            roster_cache: roster_cache.clone(),
        }));

        let dependencies = AppDependencies {
            account_directory: self.account_directory,
            change_notifier: change_notifier.clone(),
            contact_resolver,
            ctx,
            roster_cache,
            roster_mutation_domain_service,
            roster_sync_domain_service,
            session_accessor: self.session_accessor,
            task_pool,
        };

        let client_inner = Arc::new(ClientInner {
            roster: RosterService::from(&dependencies),
            change_notifier,
            roster_event_handler: RosterEventHandler::from(&dependencies),
        });

        Client::from(client_inner)
    }
}
