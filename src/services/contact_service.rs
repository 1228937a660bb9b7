//! Contact service layer.
//!
//! Business logic for adding, changing, looking up, listing, and removing
//! contacts in the address book.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult, CONTACT_NOT_FOUND};
use crate::models::Record;
use crate::repositories::AddressBook;

/// Reply after a successful `add`.
pub const CONTACT_ADDED: &str = "Contact added.";

/// Reply after a successful `change`.
pub const CONTACT_UPDATED: &str = "Contact updated.";

/// Reply after a successful `remove`.
pub const CONTACT_REMOVED: &str = "Contact removed.";

/// Reply from `all` when the address book is empty.
pub const NO_CONTACTS: &str = "No contacts found.";

/// Contact service trait for business operations.
///
/// Each operation returns the reply text on success. "Not found" is an
/// ordinary reply for `change_contact` and `remove_contact`, while
/// `show_phone` reports it as `CommandError::ContactNotFound`.
pub trait ContactService {
    /// Add one or more phones to a contact, creating the contact if needed.
    ///
    /// Phones are validated and appended one at a time; a rejected phone stops
    /// the operation but keeps the phones appended before it.
    fn add_contact(&mut self, name: &str, phones: &[&str]) -> CommandResult<String>;

    /// Replace `old_phone` with `new_phone` on an existing contact.
    fn change_contact(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> CommandResult<String>;

    /// All phones of a contact, joined with `", "`.
    fn show_phone(&self, name: &str) -> CommandResult<String>;

    /// Every contact, one per line.
    fn show_all(&self) -> CommandResult<String>;

    /// Delete a contact.
    fn remove_contact(&mut self, name: &str) -> CommandResult<String>;
}

/// Default implementation of ContactService backed by an in-memory address book.
#[derive(Debug, Default)]
pub struct ContactServiceImpl {
    book: AddressBook,
}

/// Validation helper functions.
impl ContactServiceImpl {
    fn require(value: &str, field: &'static str) -> CommandResult<()> {
        if value.is_empty() {
            return Err(CommandError::MissingArgument(field));
        }
        Ok(())
    }
}

impl ContactServiceImpl {
    /// Create a contact service over an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a contact service over an existing address book.
    pub fn with_book(book: AddressBook) -> Self {
        Self { book }
    }

    /// Read access to the underlying address book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

impl ContactService for ContactServiceImpl {
    fn add_contact(&mut self, name: &str, phones: &[&str]) -> CommandResult<String> {
        Self::require(name, "name")?;

        let name = ContactName::new(name)?;
        let (first, rest) = phones
            .split_first()
            .ok_or(CommandError::MissingArgument("phone"))?;

        // A new contact is only stored once it has a valid phone
        let first = PhoneNumber::new(*first)?;
        if self.book.find(name.as_str()).is_none() {
            tracing::debug!(contact = %name, "Creating new record");
            self.book.add_record(Record::new(name.clone()));
        }

        let record = self
            .book
            .find_mut(name.as_str())
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
        record.add_phone(first);

        for raw in rest {
            let phone = PhoneNumber::new(*raw)?;
            record.add_phone(phone);
        }

        Ok(CONTACT_ADDED.to_string())
    }

    fn change_contact(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> CommandResult<String> {
        Self::require(name, "name")?;
        Self::require(old_phone, "old phone")?;
        Self::require(new_phone, "new phone")?;

        let Some(record) = self.book.find_mut(name) else {
            return Ok(CONTACT_NOT_FOUND.to_string());
        };
        if record.find_phone(old_phone).is_none() {
            return Ok(CONTACT_NOT_FOUND.to_string());
        }

        let new_phone = PhoneNumber::new(new_phone)?;
        record.edit_phone(old_phone, new_phone);
        Ok(CONTACT_UPDATED.to_string())
    }

    fn show_phone(&self, name: &str) -> CommandResult<String> {
        Self::require(name, "name")?;

        self.book
            .find(name)
            .map(Record::phones_joined)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn show_all(&self) -> CommandResult<String> {
        if self.book.is_empty() {
            return Ok(NO_CONTACTS.to_string());
        }

        Ok(self
            .book
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn remove_contact(&mut self, name: &str) -> CommandResult<String> {
        Self::require(name, "name")?;

        if self.book.delete(name) {
            Ok(CONTACT_REMOVED.to_string())
        } else {
            Ok(CONTACT_NOT_FOUND.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_add_then_phone_returns_all_in_order() {
        let mut service = ContactServiceImpl::new();
        service.add_contact("John", &["1234567890"]).unwrap();
        service
            .add_contact("John", &["0987654321", "5555555555"])
            .unwrap();

        assert_eq!(
            service.show_phone("John").unwrap(),
            "1234567890, 0987654321, 5555555555"
        );
    }

    #[test]
    fn test_add_invalid_phone_keeps_earlier_phones() {
        let mut service = ContactServiceImpl::new();
        let result = service.add_contact("Jane", &["0501234567", "12345", "1112223333"]);

        assert_eq!(
            result,
            Err(CommandError::Validation(ValidationError::InvalidPhone(
                "12345".to_string()
            )))
        );
        assert_eq!(service.show_phone("Jane").unwrap(), "0501234567");
    }

    #[test]
    fn test_add_rejected_first_phone_stores_nothing() {
        let mut service = ContactServiceImpl::new();
        assert!(service.add_contact("Jane", &["12345"]).is_err());

        assert!(service.book().find("Jane").is_none());
        assert_eq!(service.show_all().unwrap(), "No contacts found.");
        assert_eq!(
            service.show_phone("Jane"),
            Err(CommandError::ContactNotFound("Jane".to_string()))
        );
    }

    #[test]
    fn test_add_rejected_phone_keeps_existing_record() {
        let mut service = ContactServiceImpl::new();
        service.add_contact("Jane", &["0501234567"]).unwrap();
        assert!(service.add_contact("Jane", &["12345"]).is_err());

        assert_eq!(service.show_phone("Jane").unwrap(), "0501234567");
    }

    #[test]
    fn test_add_requires_name_and_phone() {
        let mut service = ContactServiceImpl::new();
        assert_eq!(
            service.add_contact("", &["1234567890"]),
            Err(CommandError::MissingArgument("name"))
        );
        assert_eq!(
            service.add_contact("John", &[]),
            Err(CommandError::MissingArgument("phone"))
        );
        assert!(service.book().is_empty());
    }

    #[test]
    fn test_change_unknown_phone_leaves_record_untouched() {
        let mut service = ContactServiceImpl::new();
        service.add_contact("John", &["1234567890"]).unwrap();

        let reply = service
            .change_contact("John", "0000000000", "1112223333")
            .unwrap();
        assert_eq!(reply, "Contact not found.");
        assert_eq!(service.show_phone("John").unwrap(), "1234567890");
    }

    #[test]
    fn test_change_unknown_contact_is_a_reply() {
        let mut service = ContactServiceImpl::new();
        let reply = service
            .change_contact("Ghost", "1234567890", "1112223333")
            .unwrap();
        assert_eq!(reply, "Contact not found.");
    }

    #[test]
    fn test_change_invalid_new_phone() {
        let mut service = ContactServiceImpl::new();
        service.add_contact("John", &["1234567890"]).unwrap();

        let result = service.change_contact("John", "1234567890", "111");
        assert!(matches!(result, Err(CommandError::Validation(_))));
        assert_eq!(service.show_phone("John").unwrap(), "1234567890");
    }

    #[test]
    fn test_show_phone_missing_is_an_error() {
        let service = ContactServiceImpl::new();
        assert_eq!(
            service.show_phone("Ghost"),
            Err(CommandError::ContactNotFound("Ghost".to_string()))
        );
    }

    #[test]
    fn test_show_all() {
        let mut service = ContactServiceImpl::new();
        assert_eq!(service.show_all().unwrap(), "No contacts found.");

        service.add_contact("John", &["1234567890", "0987654321"]).unwrap();
        service.add_contact("Ann", &["1112223333"]).unwrap();
        assert_eq!(
            service.show_all().unwrap(),
            "John: phones 1234567890; 0987654321\nAnn: phones 1112223333"
        );
    }

    #[test]
    fn test_remove_contact() {
        let mut service = ContactServiceImpl::new();
        service.add_contact("John", &["1234567890"]).unwrap();

        assert_eq!(service.remove_contact("John").unwrap(), "Contact removed.");
        assert_eq!(service.remove_contact("John").unwrap(), "Contact not found.");
        assert!(service.show_phone("John").is_err());
    }
}
