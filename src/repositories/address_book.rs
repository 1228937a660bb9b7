use crate::models::Record;
use indexmap::IndexMap;

/// In-memory contact store keyed by contact name.
///
/// Lives for a single session. Iteration follows insertion order; overwriting
/// an existing name keeps its original position.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record stored under the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name.as_str().to_string();
        self.records.insert(key, record);
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`, reporting whether one existed.
    pub fn delete(&mut self, name: &str) -> bool {
        self.records.shift_remove(name).is_some()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the address book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
