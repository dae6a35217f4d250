// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_id::AccountId;
pub use connection_state::ConnectionState;
pub use contact_address::ContactAddress;
pub use contact_id::ContactId;

mod account_id;
mod connection_state;
mod contact_address;
mod contact_id;
