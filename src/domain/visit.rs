//! Visit record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_visit_id;

/// One logged visit. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    /// Unique identifier
    pub id: String,

    /// Owning customer. Not checked against the customer collection.
    pub customer_id: String,

    /// When the visit happened. Older records stored this as `visitDate`.
    #[serde(alias = "visitDate")]
    pub date: DateTime<Utc>,

    /// The customer's visit counter right after this visit was logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_number: Option<u32>,
}

impl Visit {
    /// Create a visit for a customer at the given time.
    pub fn new(customer_id: impl Into<String>, date: DateTime<Utc>, visit_number: Option<u32>) -> Self {
        Self {
            id: generate_visit_id(),
            customer_id: customer_id.into(),
            date,
            visit_number,
        }
    }
}
