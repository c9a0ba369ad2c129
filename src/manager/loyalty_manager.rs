//! Loyalty Manager implementation
//!
//! LoyaltyManager handles the four business events (customer created, visit
//! logged, reward marked given, encouragement requested) by combining the
//! repositories, the loyalty engine and the notifier.

use chrono::{DateTime, Utc};

use crate::domain::{Customer, Visit};
use crate::error::{Result, StampcardError};
use crate::id::now;
use crate::loyalty;
use crate::notify::{Notification, Notifier};
use crate::storage::{CustomerStore, RecordStore, VisitOrder, VisitStore};

/// Result of logging a visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitLogged {
    /// Customer after the visit was counted
    pub customer: Customer,
    pub visit: Visit,
    /// Message for the customer about their progress
    pub notification: Notification,
}

/// Result of a phone-number check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    /// True when the phone number was unknown and a profile was created
    pub created: bool,
    pub logged: VisitLogged,
}

/// A customer together with their visit history, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub customer: Customer,
    pub visits: Vec<Visit>,
}

/// Everything stored, read once for the analytics views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub visits: Vec<Visit>,
}

/// Handles loyalty events against a record store
pub struct LoyaltyManager<'a, S: RecordStore> {
    customers: CustomerStore<'a, S>,
    visits: VisitStore<'a, S>,
    notifier: Notifier,
}

impl<'a, S: RecordStore> LoyaltyManager<'a, S> {
    /// Create a new LoyaltyManager over the given store
    pub fn new(store: &'a S, notifier: Notifier) -> Self {
        Self {
            customers: CustomerStore::new(store),
            visits: VisitStore::new(store),
            notifier,
        }
    }

    pub fn customers(&self) -> &CustomerStore<'a, S> {
        &self.customers
    }

    pub fn visits(&self) -> &VisitStore<'a, S> {
        &self.visits
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Load a customer or fail with `CustomerNotFound`.
    pub fn customer(&self, id: &str) -> Result<Customer> {
        self.customers
            .get(id)?
            .ok_or_else(|| StampcardError::CustomerNotFound(id.to_string()))
    }

    //=== Customer created ===

    /// Enroll a new customer with zero visits.
    pub fn create_customer(&self, name: &str, phone: &str) -> Result<Customer> {
        self.create_customer_at(name, phone, now())
    }

    pub fn create_customer_at(&self, name: &str, phone: &str, at: DateTime<Utc>) -> Result<Customer> {
        let customer = Customer::new(name, phone, at)?;
        self.customers.add(&customer)?;
        Ok(customer)
    }

    //=== Visit logged ===

    /// Count a visit for an existing customer.
    pub fn log_visit(&self, customer_id: &str) -> Result<VisitLogged> {
        self.log_visit_at(customer_id, now())
    }

    pub fn log_visit_at(&self, customer_id: &str, at: DateTime<Utc>) -> Result<VisitLogged> {
        let mut customer = self.customer(customer_id)?;
        let visit_number = customer.record_visit(at);
        let visit = Visit::new(&customer.id, at, Some(visit_number));

        // Nothing is written unless the message can be addressed
        let notification = self
            .notifier
            .prepare(&customer.name, &customer.phone, customer.visits)?;

        // Visit first: if the customer update then fails, the counter is unchanged
        self.visits.add(&visit)?;
        self.customers.update(&customer)?;
        log::info!("Logged visit #{} for customer {}", visit_number, customer.id);

        Ok(VisitLogged {
            customer,
            visit,
            notification,
        })
    }

    /// Look a customer up by phone and log a visit, creating the profile
    /// first when the number is unknown and a name is supplied.
    pub fn check_in(&self, phone: &str, name: Option<&str>) -> Result<CheckIn> {
        self.check_in_at(phone, name, now())
    }

    pub fn check_in_at(&self, phone: &str, name: Option<&str>, at: DateTime<Utc>) -> Result<CheckIn> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(StampcardError::validation("phone", "must not be empty"));
        }

        let (customer, created) = match self.customers.find_by_phone(phone)? {
            Some(existing) => (existing, false),
            None => {
                let name = name.ok_or_else(|| {
                    StampcardError::validation("name", "required to enroll a new phone number")
                })?;
                (self.create_customer_at(name, phone, at)?, true)
            }
        };

        let logged = self.log_visit_at(&customer.id, at)?;
        Ok(CheckIn { created, logged })
    }

    //=== Reward marked given ===

    /// Redeem a reward-ready customer's reward and persist the reset.
    pub fn redeem_reward(&self, customer_id: &str) -> Result<Customer> {
        let mut customer = self.customer(customer_id)?;
        loyalty::redeem_reward(&mut customer)?;
        self.customers.update(&customer)?;
        log::info!(
            "Redeemed reward for customer {} (lifetime {})",
            customer.id,
            customer.rewards_redeemed
        );
        Ok(customer)
    }

    //=== Encouragement requested ===

    /// Progress message for a customer's current visit count.
    pub fn encourage(&self, customer_id: &str) -> Result<Notification> {
        let customer = self.customer(customer_id)?;
        self.notifier
            .prepare(&customer.name, &customer.phone, customer.visits)
    }

    //=== Read views ===

    /// A customer and their visits, newest first.
    pub fn profile(&self, customer_id: &str) -> Result<Profile> {
        let customer = self.customer(customer_id)?;
        let visits = self
            .visits
            .list_by_customer(&customer.id, VisitOrder::NewestFirst)?;
        Ok(Profile { customer, visits })
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            customers: self.customers.list_all()?,
            visits: self.visits.list_all()?,
        })
    }
}
