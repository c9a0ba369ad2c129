//! Domain types for Stampcard
//!
//! - Customer: a loyalty-card holder with a running visit counter
//! - Visit: an append-only record of one logged visit

pub mod customer;
pub mod visit;

pub use customer::Customer;
pub use visit::Visit;
