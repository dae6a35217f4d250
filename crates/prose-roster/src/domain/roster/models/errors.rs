// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::Display;
use thiserror::Error;

use crate::domain::shared::models::AccountId;

/// Failures reported by the primitives of a `RosterSession`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("Not connected")]
    NotConnected,
    #[error("No response from server")]
    NoResponse,
    #[error("Server returned an error: {0}")]
    Protocol(String),
    #[error("Interrupted")]
    Interrupted,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error("The account is not authenticated")]
    NotAuthenticated,
    #[error("The account is not connected")]
    NotConnected,
    #[error("The server did not respond")]
    NoRemoteResponse,
    #[error("The server rejected the request: {0}")]
    RemoteProtocolError(String),
    #[error("The operation was interrupted")]
    LocalInterruption,
    #[error("No session or roster item found")]
    NotFound,
    #[error("{failed} of {attempted} remote requests failed")]
    PartialFailure { failed: usize, attempted: usize },
}

impl From<SessionError> for RosterError {
    fn from(value: SessionError) -> Self {
        match value {
            SessionError::NotLoggedIn => RosterError::NotAuthenticated,
            SessionError::NotConnected => RosterError::NotConnected,
            SessionError::NoResponse => RosterError::NoRemoteResponse,
            SessionError::Protocol(message) => RosterError::RemoteProtocolError(message),
            SessionError::Interrupted => RosterError::LocalInterruption,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RosterOperation {
    #[strum(serialize = "create contact")]
    CreateContact,
    #[strum(serialize = "remove contact")]
    RemoveContact,
    #[strum(serialize = "set name")]
    SetName,
    #[strum(serialize = "set groups")]
    SetGroups,
    #[strum(serialize = "remove group")]
    RemoveGroup,
    #[strum(serialize = "rename group")]
    RenameGroup,
}

/// The user-facing error shown when a roster operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorSignal {
    NotAuthenticated,
    NotConnected,
    ConnectionFailed,
    ProtocolError,
    NetworkError,
}

impl ErrorSignal {
    /// Maps a session failure to the signal shown for `operation`. Returns `None` for
    /// interruptions which are not actionable by the user.
    pub fn for_failure(operation: RosterOperation, error: &SessionError) -> Option<Self> {
        let signal = match (operation, error) {
            (_, SessionError::Interrupted) => return None,
            (RosterOperation::SetGroups, _) => ErrorSignal::NetworkError,
            (RosterOperation::CreateContact, SessionError::NotLoggedIn) => {
                ErrorSignal::NotAuthenticated
            }
            (_, SessionError::NotLoggedIn | SessionError::NotConnected) => {
                ErrorSignal::NotConnected
            }
            (_, SessionError::NoResponse) => ErrorSignal::ConnectionFailed,
            (_, SessionError::Protocol(_)) => ErrorSignal::ProtocolError,
        };
        Some(signal)
    }
}

/// A failed roster operation, delivered to listeners.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationFailure {
    pub account: AccountId,
    pub operation: RosterOperation,
    pub signal: ErrorSignal,
}
