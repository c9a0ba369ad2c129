//! Stampcard - visit-based customer loyalty tracking
//!
//! A business logs customer visits, tracks progress toward a reward after
//! five visits, and prepares progress messages for an external messaging
//! channel. Records live in a local JSONL store.

pub mod config;
pub mod domain;
pub mod error;
pub mod id;
pub mod loyalty;
pub mod manager;
pub mod notify;
pub mod screen;
pub mod storage;

pub use error::{Result, StampcardError};
