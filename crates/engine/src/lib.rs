//! Stock reconciliation engine.
//!
//! Keeps an item's `stock_on_hand` consistent with its append-only ledger of
//! stock-changing events: receipts, direct adjustments, pending orders and
//! their fulfillment, and deterministic recomputation when a ledger entry is
//! deleted.

pub mod engine;
pub mod error;

#[cfg(test)]
mod integration_tests;

pub use engine::{ReconciliationEngine, StockUpdateOutcome};
pub use error::{EngineError, EngineResult};
