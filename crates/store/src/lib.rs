//! Persistence abstractions for items and ledger entries.
//!
//! The engine is specified against these traits, not a concrete backend: any
//! durable key/value or relational store satisfies them. An in-memory
//! implementation is provided for tests/dev.

pub mod init;
pub mod memory;
pub mod stores;

pub use init::InitGuard;
pub use memory::InMemoryStore;
pub use stores::{ItemStore, LedgerStore, StoreError};
