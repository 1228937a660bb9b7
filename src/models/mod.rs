//! Data models for the address book.
//!
//! A `Record` ties one contact name to the phone numbers stored for it.

pub mod record;

pub use record::Record;
