//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names and phone numbers. Each value object
//! validates at construction time, so a `Record` can never hold an empty name
//! or a malformed phone.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
