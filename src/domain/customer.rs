//! Customer record and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StampcardError};
use crate::id::generate_customer_id;
use crate::storage::HasId;

/// A customer enrolled in the loyalty program.
///
/// Field names are persisted in camelCase (`lastVisit`, `rewardGiven`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    //=== Identity ===
    /// Unique identifier, assigned at creation and never changed
    pub id: String,

    /// Display name
    pub name: String,

    /// Phone number as entered; the natural lookup key
    pub phone: String,

    //=== Loyalty state ===
    /// Visits in the current earning cycle
    pub visits: u32,

    /// Set when a reward was redeemed; cleared by the next logged visit
    #[serde(default)]
    pub reward_given: bool,

    /// Lifetime number of rewards redeemed
    #[serde(default)]
    pub rewards_redeemed: u32,

    //=== Timestamps ===
    pub last_visit: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer with zero visits.
    ///
    /// Name and phone are trimmed; both must be non-empty and the phone must
    /// contain at least one digit.
    pub fn new(name: &str, phone: &str, now: DateTime<Utc>) -> Result<Self> {
        let name = name.trim();
        let phone = phone.trim();

        if name.is_empty() {
            return Err(StampcardError::validation("name", "must not be empty"));
        }
        if phone.is_empty() {
            return Err(StampcardError::validation("phone", "must not be empty"));
        }
        if !phone.chars().any(|c| c.is_ascii_digit()) {
            return Err(StampcardError::validation("phone", "must contain at least one digit"));
        }

        Ok(Self {
            id: generate_customer_id(),
            name: name.to_string(),
            phone: phone.to_string(),
            visits: 0,
            reward_given: false,
            rewards_redeemed: 0,
            last_visit: now,
            created_at: now,
        })
    }

    /// Count one more visit and return the new counter value.
    ///
    /// A visit after a redemption starts the next earning cycle, so the
    /// `reward_given` flag is cleared here.
    pub fn record_visit(&mut self, now: DateTime<Utc>) -> u32 {
        self.visits += 1;
        self.last_visit = now;
        self.reward_given = false;
        self.visits
    }
}

impl HasId for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}
