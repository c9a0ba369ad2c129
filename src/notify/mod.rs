//! Notification composer.
//!
//! Turns a customer's name, phone and visit count into the text, destination
//! and deep link handed to the external messaging channel.

pub mod composer;
pub mod destination;
pub mod link;
pub mod sender;

pub use composer::{MessageTemplates, compose_message};
pub use destination::{DialingPlan, format_destination};
pub use link::{DEFAULT_LINK_BASE, build_outbound_link};
pub use sender::{LinkWriter, MessageSender, Notification};

use crate::config::Config;
use crate::error::Result;

/// Everything needed to prepare notifications for one business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifier {
    pub templates: MessageTemplates,
    pub dialing: DialingPlan,
    pub link_base: String,
}

impl Default for Notifier {
    fn default() -> Self {
        Self {
            templates: MessageTemplates::default(),
            dialing: DialingPlan::default(),
            link_base: DEFAULT_LINK_BASE.to_string(),
        }
    }
}

impl Notifier {
    pub fn from_config(config: &Config) -> Self {
        Self {
            templates: MessageTemplates::new(
                config.business.name.clone(),
                config.business.reward_description.clone(),
            ),
            dialing: DialingPlan::new(
                config.messaging.country_code.clone(),
                config.messaging.trunk_prefix.clone(),
            ),
            link_base: config.messaging.link_base.clone(),
        }
    }

    /// Compose the message and address it.
    pub fn prepare(&self, customer_name: &str, phone: &str, visits: u32) -> Result<Notification> {
        let destination = self.dialing.format_destination(phone)?;
        let message = self.templates.compose(customer_name, visits);
        let link = build_outbound_link(&self.link_base, &destination, &message);
        Ok(Notification {
            destination,
            message,
            link,
        })
    }
}
