//! Record store trait definitions and collection names.

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

/// The named collections kept in a record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Customers,
    Visits,
}

impl Collection {
    /// Stable storage key for this collection.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Customers => "loyalty_customers",
            Collection::Visits => "loyalty_visits",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Trait for records that have an ID field.
pub trait HasId {
    /// Get the record's unique identifier.
    fn id(&self) -> &str;
}

/// Whole-collection persistence.
///
/// `load` of a collection that was never saved returns an empty vector.
/// Failing to reach the medium is `StorageUnavailable`, never an empty result.
/// `save` replaces the entire collection.
pub trait RecordStore: Send + Sync {
    /// Read every record of a collection, in insertion order.
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>>;

    /// Overwrite a collection with the given records.
    fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_keys_are_stable() {
        assert_eq!(Collection::Customers.key(), "loyalty_customers");
        assert_eq!(Collection::Visits.key(), "loyalty_visits");
    }

    #[test]
    fn test_collection_display() {
        assert_eq!(Collection::Visits.to_string(), "loyalty_visits");
    }
}
