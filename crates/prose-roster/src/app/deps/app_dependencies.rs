// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ChangeNotifierTrait;
use crate::domain::roster::repos::RosterCacheRepository;
use crate::domain::roster::services::{
    AccountDirectory, ContactResolver, ConversationLookup, RosterMutationDomainService,
    RosterSyncDomainService, SessionAccessor,
};
use crate::infra::general::TaskPool;

pub type DynAccountDirectory = Arc<dyn AccountDirectory>;
pub type DynAppContext = Arc<AppContext>;
pub type DynChangeNotifier = Arc<dyn ChangeNotifierTrait>;
pub type DynContactResolver = Arc<dyn ContactResolver>;
pub type DynConversationLookup = Arc<dyn ConversationLookup>;
pub type DynRosterCacheRepository = Arc<dyn RosterCacheRepository>;
pub type DynRosterMutationDomainService = Arc<dyn RosterMutationDomainService>;
pub type DynRosterSyncDomainService = Arc<dyn RosterSyncDomainService>;
pub type DynSessionAccessor = Arc<dyn SessionAccessor>;
pub type DynTaskPool = Arc<TaskPool>;

pub struct AppDependencies {
    pub account_directory: DynAccountDirectory,
    pub change_notifier: DynChangeNotifier,
    pub contact_resolver: DynContactResolver,
    pub ctx: DynAppContext,
    pub roster_cache: DynRosterCacheRepository,
    pub roster_mutation_domain_service: DynRosterMutationDomainService,
    pub roster_sync_domain_service: DynRosterSyncDomainService,
    pub session_accessor: DynSessionAccessor,
    pub task_pool: DynTaskPool,
}
