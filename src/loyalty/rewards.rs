//! Reward eligibility and redemption.

use crate::domain::Customer;
use crate::error::{Result, StampcardError};

/// Visits needed to earn a reward.
pub const REWARD_THRESHOLD: u32 = 5;

/// Visits remaining until a reward is earned, never below zero.
pub fn visits_remaining(visits: u32) -> u32 {
    REWARD_THRESHOLD.saturating_sub(visits)
}

/// Customer has reached the threshold and has not redeemed yet.
pub fn is_reward_ready(customer: &Customer) -> bool {
    customer.visits >= REWARD_THRESHOLD && !customer.reward_given
}

/// Customer is exactly one visit away from a reward.
pub fn is_near_reward(customer: &Customer) -> bool {
    customer.visits == REWARD_THRESHOLD - 1
}

/// Grant the reward: reset the counter and mark it given.
///
/// Fails with `RewardNotReady` unless the customer is reward-ready.
pub fn redeem_reward(customer: &mut Customer) -> Result<()> {
    if !is_reward_ready(customer) {
        return Err(StampcardError::RewardNotReady(customer.id.clone()));
    }
    customer.visits = 0;
    customer.reward_given = true;
    customer.rewards_redeemed += 1;
    Ok(())
}

/// Rewards tracker lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardsBoard {
    /// Customers who can redeem now
    pub ready: Vec<Customer>,
    /// Customers one visit away
    pub near: Vec<Customer>,
}

impl RewardsBoard {
    pub fn from_customers(customers: &[Customer]) -> Self {
        Self {
            ready: customers.iter().filter(|c| is_reward_ready(c)).cloned().collect(),
            near: customers.iter().filter(|c| is_near_reward(c)).cloned().collect(),
        }
    }
}
