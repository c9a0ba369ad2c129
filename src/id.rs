//! ID generation utilities for Stampcard
//!
//! Provides functions for generating unique identifiers for customers and visits.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Current time, truncated to millisecond precision.
///
/// Stored timestamps round-trip through RFC 3339 text, so keeping them at
/// millisecond precision makes freshly created records compare equal to
/// their reloaded copies.
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

fn generate_id(prefix: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let random: u16 = rand::rng().random();
    format!("{}-{}-{:04x}", prefix, timestamp, random)
}

/// Generate a customer ID
///
/// Format: `cus-{timestamp_ms}-{random_hex}`
/// Example: `cus-1738300800123-a1b2`
pub fn generate_customer_id() -> String {
    generate_id("cus")
}

/// Generate a visit ID
///
/// Format: `vis-{timestamp_ms}-{random_hex}`
pub fn generate_visit_id() -> String {
    generate_id("vis")
}
