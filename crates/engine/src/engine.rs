use chrono::Utc;
use tracing::{debug, info, warn};

use stocktrail_core::{DomainError, EntryId, ItemId};
use stocktrail_ledger::{InventoryItem, LedgerEntry, PlaceOrder, StockUpdate};
use stocktrail_store::{ItemStore, LedgerStore};

use crate::error::EngineResult;

/// Result of a stock update: the rewritten item and the ledger entry that
/// records why it changed (freshly appended, or a pending order completed in
/// place).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockUpdateOutcome {
    pub item: InventoryItem,
    pub transaction: LedgerEntry,
}

/// The stock reconciliation engine.
///
/// Generic over the store so the same rules run against any backend that
/// satisfies [`ItemStore`] + [`LedgerStore`]. The engine assumes at most
/// per-call atomicity from the store: an operation that writes both the item
/// and the ledger performs two independent writes, and a failure between them
/// leaves the stores visibly out of step. Backends with transactions should
/// wrap the pair themselves.
///
/// Operations on different items never interact. Operations on the same item
/// are not serialized here; concurrent writers race last-write-wins on
/// `stock_on_hand`.
///
/// Caller obligation for item teardown: delete every ledger entry referencing
/// an item (via [`delete_entry`](Self::delete_entry)) before removing the
/// item itself. The engine does not enforce this ordering.
#[derive(Debug)]
pub struct ReconciliationEngine<S> {
    store: S,
}

impl<S> ReconciliationEngine<S>
where
    S: ItemStore + LedgerStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Place a pending order: a ledger entry for quantity asked but not yet
    /// received. Snapshots the item's current stock; the item itself is not
    /// touched.
    pub fn place_order(&self, request: PlaceOrder) -> EngineResult<LedgerEntry> {
        let quantity = request.quantity()?;
        let item = self
            .store
            .get_item(request.inventory_id)?
            .ok_or_else(|| DomainError::not_found("inventory item"))?;

        let entry = LedgerEntry::pending(
            EntryId::new(),
            item.id,
            Utc::now(),
            quantity,
            item.stock_on_hand,
            request.notes,
            request.employee_name,
        );
        self.store.put_entry(entry.clone())?;

        info!(entry_id = %entry.id, inventory_id = %item.id, %quantity, "pending order placed");
        Ok(entry)
    }

    /// Receive stock or set it directly, and record why.
    ///
    /// Receive mode adds to the current stock; direct-set mode overwrites it
    /// (the recorded received quantity becomes the signed delta, so stock can
    /// go down). In receive mode a supplied `pending_order_id` that resolves
    /// completes that order in place; one that doesn't resolve falls through
    /// to appending a fresh completed entry.
    pub fn update_stock(
        &self,
        inventory_id: ItemId,
        request: StockUpdate,
    ) -> EngineResult<StockUpdateOutcome> {
        let change = request.change()?;
        let item = self
            .store
            .get_item(inventory_id)?
            .ok_or_else(|| DomainError::not_found("inventory item"))?;

        let rec = change.apply(item.stock_on_hand);
        debug!(
            %inventory_id,
            previous_stock = %rec.previous_stock,
            new_stock = %rec.new_stock,
            received = %rec.received,
            "applying stock change"
        );

        let updated = item.with_stock(rec.new_stock);
        self.store.put_item(updated.clone())?;

        // Completing a pending order mutates it in place instead of creating
        // a second entry. Direct-set updates are separate adjustments and
        // never complete orders.
        if change.is_receive() {
            if let Some(pending_id) = request.pending_order_id {
                if let Some(existing) = self.store.get_entry(pending_id)? {
                    let transaction = existing.fulfill(
                        rec.received,
                        rec.previous_stock,
                        rec.new_stock,
                        request.notes.clone(),
                        request.employee_name.clone(),
                    );
                    self.store.put_entry(transaction.clone())?;

                    info!(
                        entry_id = %transaction.id,
                        %inventory_id,
                        ordered = %transaction.ordered_quantity,
                        received = %transaction.actual_received,
                        "pending order fulfilled"
                    );
                    return Ok(StockUpdateOutcome {
                        item: updated,
                        transaction,
                    });
                }
                warn!(%pending_id, "pending order not found, recording a fresh completed entry");
            }
        }

        let transaction = LedgerEntry::completed(
            EntryId::new(),
            inventory_id,
            Utc::now(),
            rec.received,
            rec.previous_stock,
            rec.new_stock,
            request.notes,
            request.employee_name,
        );
        self.store.put_entry(transaction.clone())?;

        info!(
            entry_id = %transaction.id,
            %inventory_id,
            received = %transaction.actual_received,
            new_stock = %transaction.new_stock,
            "stock updated"
        );
        Ok(StockUpdateOutcome {
            item: updated,
            transaction,
        })
    }

    /// Delete a ledger entry ("undo") and keep the owning item's stock
    /// consistent with the remaining history.
    ///
    /// Pending entries never touched stock, so they are simply removed.
    /// Deleting a completed entry recomputes the item's stock as the
    /// `new_stock` of the latest remaining completed entry (timestamp order,
    /// ties broken by entry id), falling back to the deleted entry's own
    /// `previous_stock` when it was the only completed entry. Trusting each
    /// entry's stored snapshot is the documented contract; it can drift when
    /// completed entries are deleted out of chronological order.
    pub fn delete_entry(&self, id: EntryId) -> EngineResult<()> {
        let entry = self
            .store
            .get_entry(id)?
            .ok_or_else(|| DomainError::not_found("ledger entry"))?;

        if entry.is_completed() {
            // Item may already be gone mid-teardown; the deletion itself
            // still proceeds.
            if let Some(item) = self.store.get_item(entry.inventory_id)? {
                let remaining = self.store.list_entries(Some(entry.inventory_id))?;
                let latest = remaining
                    .into_iter()
                    .filter(|e| e.id != id && e.is_completed())
                    .max_by_key(|e| (e.timestamp, e.id));

                let stock = match &latest {
                    Some(e) => e.new_stock,
                    None => entry.previous_stock,
                };
                self.store.put_item(item.with_stock(stock))?;

                info!(
                    entry_id = %id,
                    inventory_id = %entry.inventory_id,
                    recomputed_stock = %stock,
                    from_remaining_entry = latest.is_some(),
                    "stock recomputed after ledger deletion"
                );
            } else {
                debug!(entry_id = %id, "owning item absent, skipping stock recompute");
            }
        }

        self.store.delete_entry(id)?;
        Ok(())
    }

    /// All ledger entries, optionally filtered to one item, newest first.
    /// Read-only; entries sharing a timestamp are ordered by id for
    /// determinism.
    pub fn list_entries(&self, inventory_id: Option<ItemId>) -> EngineResult<Vec<LedgerEntry>> {
        let mut entries = self.store.list_entries(inventory_id)?;
        entries.sort_by(|a, b| (b.timestamp, b.id).cmp(&(a.timestamp, a.id)));
        Ok(entries)
    }
}
