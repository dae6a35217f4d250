// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::roster::models::OperationFailure;
use crate::domain::shared::models::ContactId;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// Contacts were added, removed or their attributes changed.
    ContactsChanged { ids: Vec<ContactId> },

    /// A roster operation was rejected or could not reach the server.
    OperationFailed { failure: OperationFailure },
}
