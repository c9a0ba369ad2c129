//! Loyalty tiers derived from the visit counter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Customer;

/// Loyalty bucket for a customer's current visit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// 1-2 visits
    Bronze,
    /// 3-4 visits
    Silver,
    /// 5+ visits
    Gold,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 3] = [Tier::Bronze, Tier::Silver, Tier::Gold];

    /// Human-readable visit range for this tier.
    pub fn range_label(&self) -> &'static str {
        match self {
            Tier::Bronze => "1-2 visits",
            Tier::Silver => "3-4 visits",
            Tier::Gold => "5+ visits",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
        };
        f.write_str(name)
    }
}

/// Tier for a visit count. Zero visits has no tier.
pub fn tier(visits: u32) -> Option<Tier> {
    match visits {
        0 => None,
        1..=2 => Some(Tier::Bronze),
        3..=4 => Some(Tier::Silver),
        _ => Some(Tier::Gold),
    }
}

/// Number of customers in each tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub bronze: usize,
    pub silver: usize,
    pub gold: usize,
}

impl TierCounts {
    /// Bucket customers by tier; customers without visits are skipped.
    pub fn from_customers(customers: &[Customer]) -> Self {
        let mut counts = Self::default();
        for customer in customers {
            match tier(customer.visits) {
                Some(Tier::Bronze) => counts.bronze += 1,
                Some(Tier::Silver) => counts.silver += 1,
                Some(Tier::Gold) => counts.gold += 1,
                None => {}
            }
        }
        counts
    }

    /// Count for a single tier.
    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::Bronze => self.bronze,
            Tier::Silver => self.silver,
            Tier::Gold => self.gold,
        }
    }

    /// Customers with at least one visit.
    pub fn total(&self) -> usize {
        self.bronze + self.silver + self.gold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn with_visits(visits: u32) -> Customer {
        let mut c = Customer::new("Test", "0700000000", Utc::now()).unwrap();
        c.visits = visits;
        c
    }

    #[test]
    fn test_tier_boundaries_inclusive() {
        assert_eq!(tier(0), None);
        assert_eq!(tier(1), Some(Tier::Bronze));
        assert_eq!(tier(2), Some(Tier::Bronze));
        assert_eq!(tier(3), Some(Tier::Silver));
        assert_eq!(tier(4), Some(Tier::Silver));
        assert_eq!(tier(5), Some(Tier::Gold));
        assert_eq!(tier(42), Some(Tier::Gold));
    }

    #[test]
    fn test_tier_is_stable() {
        for visits in 0..12 {
            assert_eq!(tier(visits), tier(visits));
        }
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Bronze < Tier::Silver);
        assert!(Tier::Silver < Tier::Gold);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(Tier::Gold.to_string(), "Gold");
        assert_eq!(Tier::Silver.range_label(), "3-4 visits");
    }

    #[test]
    fn test_tier_counts_skip_zero_visits() {
        let customers: Vec<Customer> = [0, 1, 2, 3, 5, 9].into_iter().map(with_visits).collect();
        let counts = TierCounts::from_customers(&customers);
        assert_eq!(counts, TierCounts { bronze: 2, silver: 1, gold: 2 });
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.get(Tier::Gold), 2);
    }
}
