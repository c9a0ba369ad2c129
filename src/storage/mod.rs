//! Storage layer for Stampcard.
//!
//! A `RecordStore` persists whole collections; `CustomerStore` and
//! `VisitStore` provide the typed repository operations on top of it.
//! Stores are passed in by reference so callers choose the backend:
//! `JsonlStore` on disk, `MemoryStore` in tests.

mod customers;
mod jsonl;
mod memory;
mod traits;
mod visits;

pub use customers::CustomerStore;
pub use jsonl::JsonlStore;
pub use memory::MemoryStore;
pub use traits::{Collection, HasId, RecordStore};
pub use visits::{VisitOrder, VisitStore};
