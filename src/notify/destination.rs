//! Phone number normalization for the messaging channel.

use crate::error::{Result, StampcardError};

/// How local numbers map to international ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialingPlan {
    /// Country calling code, digits only (e.g. `254`)
    pub country_code: String,
    /// Local trunk prefix replaced by the country code (e.g. `0`); may be empty
    pub trunk_prefix: String,
}

impl Default for DialingPlan {
    fn default() -> Self {
        Self {
            country_code: "254".to_string(),
            trunk_prefix: "0".to_string(),
        }
    }
}

impl DialingPlan {
    pub fn new(country_code: impl Into<String>, trunk_prefix: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            trunk_prefix: trunk_prefix.into(),
        }
    }

    /// Digits-only, country-code-prefixed destination for a raw phone number.
    ///
    /// Non-digits are dropped. A leading trunk prefix is swapped for the
    /// country code; otherwise the country code is prepended unless the
    /// number already starts with it.
    pub fn format_destination(&self, raw_phone: &str) -> Result<String> {
        let cleaned: String = raw_phone.chars().filter(|c| c.is_ascii_digit()).collect();
        if cleaned.is_empty() {
            return Err(StampcardError::validation("phone", "contains no digits"));
        }

        let trunk = self.trunk_prefix.as_str();
        let destination = if !trunk.is_empty() && cleaned.starts_with(trunk) {
            format!("{}{}", self.country_code, &cleaned[trunk.len()..])
        } else if cleaned.starts_with(&self.country_code) {
            cleaned
        } else {
            format!("{}{}", self.country_code, cleaned)
        };
        Ok(destination)
    }
}

/// Format with the default plan (Kenya: `0` -> `254`).
pub fn format_destination(raw_phone: &str) -> Result<String> {
    DialingPlan::default().format_destination(raw_phone)
}
