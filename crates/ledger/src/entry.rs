use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stocktrail_core::{EntryId, ItemId};

/// Ledger entry lifecycle.
///
/// `Pending` entries describe stock that was ordered but not yet received and
/// never touch the item's stock. `Completed` entries describe an applied
/// stock change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Pending,
    Completed,
}

/// One record in the append-only stock ledger.
///
/// Entries are immutable once written, with one intentional exception: a
/// pending order is mutated in place when it is fulfilled, so that a single
/// entry represents the order end-to-end instead of leaving an orphaned
/// pending record beside a new completed one.
///
/// Quantities are exact decimals in memory and strings on the wire (the
/// backing stores use text-typed numeric columns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: EntryId,
    pub inventory_id: ItemId,
    /// Creation time; the sole ordering key for "most recent" queries.
    pub timestamp: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::str")]
    pub ordered_quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub actual_received: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub previous_stock: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub new_stock: Decimal,
    /// Legacy field kept for storage-format compatibility; no logic reads it.
    #[serde(default, with = "rust_decimal::serde::str")]
    pub consumption: Decimal,
    pub status: EntryStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub employee_name: String,
}

impl LedgerEntry {
    /// A pending order: quantity asked for, nothing received yet.
    ///
    /// Snapshots the item's current stock into both `previous_stock` and
    /// `new_stock` (no change has been applied yet).
    pub fn pending(
        id: EntryId,
        inventory_id: ItemId,
        timestamp: DateTime<Utc>,
        ordered_quantity: Decimal,
        stock_snapshot: Decimal,
        notes: Option<String>,
        employee_name: Option<String>,
    ) -> Self {
        Self {
            id,
            inventory_id,
            timestamp,
            ordered_quantity,
            actual_received: Decimal::ZERO,
            previous_stock: stock_snapshot,
            new_stock: stock_snapshot,
            consumption: Decimal::ZERO,
            status: EntryStatus::Pending,
            notes: notes.unwrap_or_default(),
            employee_name: employee_name.unwrap_or_default(),
        }
    }

    /// A directly-completed entry (receipt or adjustment with no linked
    /// order). With nothing pre-ordered, the received quantity doubles as the
    /// recorded `ordered_quantity`.
    pub fn completed(
        id: EntryId,
        inventory_id: ItemId,
        timestamp: DateTime<Utc>,
        received: Decimal,
        previous_stock: Decimal,
        new_stock: Decimal,
        notes: Option<String>,
        employee_name: Option<String>,
    ) -> Self {
        Self {
            id,
            inventory_id,
            timestamp,
            ordered_quantity: received,
            actual_received: received,
            previous_stock,
            new_stock,
            consumption: Decimal::ZERO,
            status: EntryStatus::Completed,
            notes: notes.unwrap_or_default(),
            employee_name: employee_name.unwrap_or_default(),
        }
    }

    /// Fulfill this entry with an actual receipt.
    ///
    /// The order's "ask" and "when ordered" stay historical: `id`,
    /// `inventory_id`, `timestamp`, `ordered_quantity` and `consumption` are
    /// preserved. Notes and employee name fall back to the stored values when
    /// the receipt doesn't supply them.
    pub fn fulfill(
        &self,
        received: Decimal,
        previous_stock: Decimal,
        new_stock: Decimal,
        notes: Option<String>,
        employee_name: Option<String>,
    ) -> Self {
        Self {
            actual_received: received,
            previous_stock,
            new_stock,
            status: EntryStatus::Completed,
            notes: notes
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| self.notes.clone()),
            employee_name: employee_name
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| self.employee_name.clone()),
            ..self.clone()
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == EntryStatus::Pending
    }

    pub fn is_completed(&self) -> bool {
        self.status == EntryStatus::Completed
    }
}
