use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stocktrail_core::ItemId;

/// An inventory item.
///
/// `stock_on_hand` is **derived state**: it always equals the `new_stock` of
/// the most recent completed ledger entry for this item (or the value a direct
/// adjustment last set, which is the same thing — direct adjustments record a
/// completed entry too), falling back to its initial value when no entry
/// exists. Only the reconciliation engine mutates it.
///
/// Everything besides `id` and `stock_on_hand` is descriptive metadata with no
/// logic attached; stock mutations must carry it through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub room: String,
    pub price: String,
    /// Reorder threshold, opaque to the engine.
    pub stock_up: String,
    pub vendor: String,
    pub method: String,
    pub department: String,
    pub units: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub stock_on_hand: Decimal,
}

impl InventoryItem {
    /// Copy of this item with `stock_on_hand` replaced and all metadata kept.
    pub fn with_stock(&self, stock_on_hand: Decimal) -> Self {
        Self {
            stock_on_hand,
            ..self.clone()
        }
    }
}
