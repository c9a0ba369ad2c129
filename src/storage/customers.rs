//! Customer repository.

use super::traits::{Collection, HasId, RecordStore};
use crate::domain::Customer;
use crate::error::{Result, StampcardError};

/// Typed customer operations over a record store.
pub struct CustomerStore<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> CustomerStore<'a, S> {
    /// Create a new CustomerStore wrapping the given store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// List all customers in insertion order.
    pub fn list_all(&self) -> Result<Vec<Customer>> {
        self.store.load(Collection::Customers)
    }

    /// Number of stored customers.
    pub fn count(&self) -> Result<usize> {
        Ok(self.list_all()?.len())
    }

    /// Get a customer by ID.
    pub fn get(&self, id: &str) -> Result<Option<Customer>> {
        Ok(self.list_all()?.into_iter().find(|c| c.id == id))
    }

    /// Append a customer. The caller guarantees the ID is unused.
    pub fn add(&self, customer: &Customer) -> Result<()> {
        let mut customers = self.list_all()?;
        if customers.iter().any(|c| c.phone == customer.phone) {
            log::warn!("Phone {} is already enrolled; adding {} anyway", customer.phone, customer.id);
        }
        customers.push(customer.clone());
        self.store.save(Collection::Customers, &customers)?;
        log::info!("Added customer {} ({})", customer.id, customer.name);
        Ok(())
    }

    /// Replace the first customer whose ID matches.
    ///
    /// Fails with `CustomerNotFound` when nothing matches.
    pub fn update(&self, customer: &Customer) -> Result<()> {
        let mut customers = self.list_all()?;
        let slot = customers
            .iter_mut()
            .find(|c| c.id() == customer.id())
            .ok_or_else(|| StampcardError::CustomerNotFound(customer.id.clone()))?;
        *slot = customer.clone();
        self.store.save(Collection::Customers, &customers)
    }

    /// First customer whose phone equals `phone` exactly.
    pub fn find_by_phone(&self, phone: &str) -> Result<Option<Customer>> {
        Ok(self.list_all()?.into_iter().find(|c| c.phone == phone))
    }

    /// Customers whose name contains `term` (case-insensitive) or whose
    /// phone contains it. A blank term matches everyone.
    pub fn search(&self, term: &str) -> Result<Vec<Customer>> {
        let customers = self.list_all()?;
        let term = term.trim();
        if term.is_empty() {
            return Ok(customers);
        }

        let needle = term.to_lowercase();
        Ok(customers
            .into_iter()
            .filter(|c| c.name.to_lowercase().contains(&needle) || c.phone.contains(term))
            .collect())
    }
}
