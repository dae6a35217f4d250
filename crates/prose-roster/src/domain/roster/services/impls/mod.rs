// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact_resolver::{ContactResolver, ContactResolverDependencies};
pub use roster_mutation_domain_service::{
    RosterMutationDomainService, RosterMutationDomainServiceDependencies,
};
pub use roster_sync_domain_service::{
    RosterSyncDomainService, RosterSyncDomainServiceDependencies,
};

mod contact_resolver;
mod roster_mutation_domain_service;
mod roster_sync_domain_service;
