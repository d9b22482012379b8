//! Stock ledger domain module.
//!
//! This crate contains the business rules for inventory stock and its ledger,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Quantities are exact decimals; the text-typed representation some
//! backends use is a serde boundary concern only.

pub mod command;
pub mod entry;
pub mod item;

pub use command::{PlaceOrder, Reconciliation, StockChange, StockUpdate};
pub use entry::{EntryStatus, LedgerEntry};
pub use item::InventoryItem;
