//! Visit repository.

use super::traits::{Collection, RecordStore};
use crate::domain::Visit;
use crate::error::Result;

/// Ordering for visit listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitOrder {
    /// Insertion order
    #[default]
    Stored,
    /// Most recent first
    NewestFirst,
}

/// Typed visit operations over a record store.
pub struct VisitStore<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> VisitStore<'a, S> {
    /// Create a new VisitStore wrapping the given store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// List all visits in insertion order.
    pub fn list_all(&self) -> Result<Vec<Visit>> {
        self.store.load(Collection::Visits)
    }

    /// Append a visit. The customer reference is not checked.
    pub fn add(&self, visit: &Visit) -> Result<()> {
        let mut visits = self.list_all()?;
        visits.push(visit.clone());
        self.store.save(Collection::Visits, &visits)?;
        log::debug!("Added visit {} for customer {}", visit.id, visit.customer_id);
        Ok(())
    }

    /// Visits belonging to one customer.
    pub fn list_by_customer(&self, customer_id: &str, order: VisitOrder) -> Result<Vec<Visit>> {
        let mut visits: Vec<Visit> = self
            .list_all()?
            .into_iter()
            .filter(|v| v.customer_id == customer_id)
            .collect();

        if order == VisitOrder::NewestFirst {
            // Stable sort keeps insertion order among equal timestamps
            visits.sort_by(|a, b| b.date.cmp(&a.date));
        }
        Ok(visits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::{DateTime, TimeZone, Utc};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_add_and_list_all() {
        let store = MemoryStore::new();
        let visits = VisitStore::new(&store);

        let v1 = Visit::new("cus-1", day(1), Some(1));
        let v2 = Visit::new("cus-2", day(2), Some(1));
        visits.add(&v1).unwrap();
        visits.add(&v2).unwrap();

        assert_eq!(visits.list_all().unwrap(), vec![v1, v2]);
    }

    #[test]
    fn test_add_does_not_check_customer() {
        let store = MemoryStore::new();
        let visits = VisitStore::new(&store);
        visits.add(&Visit::new("nobody", day(1), None)).unwrap();
        assert_eq!(visits.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_list_by_customer_stored_order() {
        let store = MemoryStore::new();
        let visits = VisitStore::new(&store);
        let late = Visit::new("cus-1", day(5), Some(1));
        let other = Visit::new("cus-2", day(3), Some(1));
        let early = Visit::new("cus-1", day(2), Some(2));
        for v in [&late, &other, &early] {
            visits.add(v).unwrap();
        }

        let listed = visits.list_by_customer("cus-1", VisitOrder::Stored).unwrap();
        assert_eq!(listed, vec![late, early]);
    }

    #[test]
    fn test_list_by_customer_newest_first() {
        let store = MemoryStore::new();
        let visits = VisitStore::new(&store);
        let v1 = Visit::new("cus-1", day(1), Some(1));
        let v3 = Visit::new("cus-1", day(3), Some(3));
        let v2 = Visit::new("cus-1", day(2), Some(2));
        for v in [&v1, &v3, &v2] {
            visits.add(v).unwrap();
        }

        let listed = visits
            .list_by_customer("cus-1", VisitOrder::NewestFirst)
            .unwrap();
        assert_eq!(listed, vec![v3, v2, v1]);
    }

    #[test]
    fn test_list_by_unknown_customer_is_empty() {
        let store = MemoryStore::new();
        let visits = VisitStore::new(&store);
        visits.add(&Visit::new("cus-1", day(1), None)).unwrap();
        assert!(visits
            .list_by_customer("cus-9", VisitOrder::default())
            .unwrap()
            .is_empty());
    }
}
