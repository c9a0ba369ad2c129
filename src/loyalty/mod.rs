//! Loyalty engine.
//!
//! Pure functions over customer and visit snapshots: tier classification,
//! reward rules, and the analytics shown on the dashboard.

pub mod analytics;
pub mod rewards;
pub mod tier;

pub use analytics::{
    DailyCount, Overview, WeekdayHistogram, daily_trend, day_of_week_histogram, days_since, most_loyal,
    weekly_visit_count,
};
pub use rewards::{
    REWARD_THRESHOLD, RewardsBoard, is_near_reward, is_reward_ready, redeem_reward, visits_remaining,
};
pub use tier::{Tier, TierCounts, tier};
