//! Application service layer.
//!
//! Services contain the address book business logic. The executor sits in
//! front of them, checking arity and translating failures into replies.

mod contact_service;
mod executor;

pub use contact_service::{
    ContactService, ContactServiceImpl, CONTACT_ADDED, CONTACT_REMOVED, CONTACT_UPDATED,
    NO_CONTACTS,
};
pub use crate::error::INVALID_COMMAND;
pub use executor::{CommandExecutor, Outcome, FAREWELL, GREETING};
