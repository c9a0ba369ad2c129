//! Customer-facing message text.

use crate::loyalty::{REWARD_THRESHOLD, visits_remaining};

/// Business details substituted into every message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplates {
    pub business_name: String,
    pub reward_description: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            business_name: "Furaha".to_string(),
            reward_description: "FREE service".to_string(),
        }
    }
}

impl MessageTemplates {
    pub fn new(business_name: impl Into<String>, reward_description: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            reward_description: reward_description.into(),
        }
    }

    /// Message for a customer who now has `visits` visits in the current cycle.
    pub fn compose(&self, customer_name: &str, visits: u32) -> String {
        let reward = &self.reward_description;
        let remaining = visits_remaining(visits);

        if visits >= REWARD_THRESHOLD {
            format!(
                "Hi {customer_name}! Thanks for your visit today! You've completed {visits} visits \
                 and earned a {reward}! Show this message to redeem your reward. See you soon!"
            )
        } else if visits == REWARD_THRESHOLD - 1 {
            format!(
                "Hi {customer_name}! Thanks for your visit today! You've visited {visits} times - \
                 just 1 more visit for a {reward}! We can't wait to reward your loyalty!"
            )
        } else if visits == 1 {
            format!(
                "Hi {customer_name}! Welcome to {business}, and thanks for your first visit with us! \
                 Visit {remaining} more times and your next service is a {reward}!",
                business = self.business_name,
            )
        } else {
            format!(
                "Hi {customer_name}! Thanks for your visit today! You've visited {visits} times. \
                 Just {remaining} more visits to go for a {reward}!"
            )
        }
    }
}

/// Compose a message with the default business details.
pub fn compose_message(customer_name: &str, visits: u32) -> String {
    MessageTemplates::default().compose(customer_name, visits)
}
