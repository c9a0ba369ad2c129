//! Loyalty Manager module
//!
//! Orchestrates customer and visit events.

mod loyalty_manager;

pub use loyalty_manager::{CheckIn, LoyaltyManager, Profile, Snapshot, VisitLogged};
