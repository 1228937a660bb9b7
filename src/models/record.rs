//! Record model: one contact and its phone numbers.

use crate::domain::{ContactName, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// Phones keep insertion order and may repeat. Lookups by value always act on
/// the first matching entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Name the record is stored under
    pub name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with no phone numbers.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// Append a phone number.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// Returns `false` and leaves the record untouched when `old` is not present.
    pub fn edit_phone(&mut self, old: &str, new: PhoneNumber) -> bool {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    /// Remove the first phone equal to `value`.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == value) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Phone numbers joined with `", "`, as shown by the `phone` command.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}: phones {}", self.name, phones)
    }
}
