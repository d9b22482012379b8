//! Validated stock-changing requests and the pure reconciliation computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stocktrail_core::{DomainError, DomainResult, EntryId, ItemId};

/// Request: place a pending order for an item.
///
/// Quantities arrive as optional so that "missing field" can be reported
/// distinctly from "non-positive value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrder {
    pub inventory_id: ItemId,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub ordered_quantity: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
}

impl PlaceOrder {
    /// Validate the ordered quantity: present and strictly positive.
    pub fn quantity(&self) -> DomainResult<Decimal> {
        let qty = self
            .ordered_quantity
            .ok_or_else(|| DomainError::invalid_input("missing required field: ordered_quantity"))?;
        if qty <= Decimal::ZERO {
            return Err(DomainError::invalid_input(
                "ordered_quantity must be a positive number",
            ));
        }
        Ok(qty)
    }
}

/// Request: receive stock or set it directly.
///
/// Exactly one of `actual_received` (receive mode) or `new_stock` (direct-set
/// mode) must be supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub actual_received: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub new_stock: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    /// When set (receive mode only), fulfill this pending order in place
    /// instead of appending a fresh entry.
    #[serde(default)]
    pub pending_order_id: Option<EntryId>,
}

impl StockUpdate {
    /// Validate the request into the stock change it describes.
    pub fn change(&self) -> DomainResult<StockChange> {
        match (self.actual_received, self.new_stock) {
            (None, None) => Err(DomainError::invalid_input(
                "missing required field: actual_received or new_stock",
            )),
            (Some(_), Some(_)) => Err(DomainError::invalid_input(
                "supply exactly one of actual_received or new_stock",
            )),
            (Some(received), None) => {
                if received < Decimal::ZERO {
                    return Err(DomainError::invalid_input(
                        "actual_received cannot be negative",
                    ));
                }
                Ok(StockChange::Receive { received })
            }
            (None, Some(target)) => {
                if target < Decimal::ZERO {
                    return Err(DomainError::invalid_input(
                        "new_stock must be a non-negative number",
                    ));
                }
                Ok(StockChange::SetTo { target })
            }
        }
    }
}

/// A validated stock change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockChange {
    /// Receipt of goods: stock goes up by `received` (never down).
    Receive { received: Decimal },
    /// Direct adjustment to an absolute target; the recorded received
    /// quantity becomes the signed delta, so stock can go down.
    SetTo { target: Decimal },
}

impl StockChange {
    /// Apply the change to a known previous stock level. Pure and exact.
    pub fn apply(self, previous_stock: Decimal) -> Reconciliation {
        match self {
            StockChange::Receive { received } => Reconciliation {
                previous_stock,
                new_stock: previous_stock + received,
                received,
            },
            StockChange::SetTo { target } => Reconciliation {
                previous_stock,
                new_stock: target,
                received: target - previous_stock,
            },
        }
    }

    pub fn is_receive(self) -> bool {
        matches!(self, StockChange::Receive { .. })
    }
}

/// Outcome of applying a [`StockChange`]: the figures a completed ledger
/// entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    pub previous_stock: Decimal,
    pub new_stock: Decimal,
    /// Quantity recorded as received; negative for shrinkage/corrections.
    pub received: Decimal,
}
