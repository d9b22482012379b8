use std::sync::Arc;

use thiserror::Error;

use stocktrail_core::{EntryId, ItemId};
use stocktrail_ledger::{InventoryItem, LedgerEntry};

/// Persistence failure.
///
/// Infrastructure errors only (IO, connectivity, backend constraints); domain
/// failures never travel through this type. The engine performs no retries —
/// a store error is terminal for the current operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),

    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Durable, keyed storage for inventory items.
///
/// `put_item` is insert-or-replace by id; it is the single authoritative
/// write for `stock_on_hand`. Implementations provide at least per-call
/// atomicity; nothing here assumes cross-call transactions.
pub trait ItemStore: Send + Sync {
    fn get_item(&self, id: ItemId) -> Result<Option<InventoryItem>, StoreError>;
    fn put_item(&self, item: InventoryItem) -> Result<(), StoreError>;
    /// Returns whether a record was actually removed.
    fn delete_item(&self, id: ItemId) -> Result<bool, StoreError>;
}

/// Durable, keyed storage for ledger entries.
///
/// `list_entries` returns entries in no particular order; callers sort.
/// `put_entry` is insert-or-replace by id, which is how a pending order is
/// mutated into its own completion record.
pub trait LedgerStore: Send + Sync {
    fn get_entry(&self, id: EntryId) -> Result<Option<LedgerEntry>, StoreError>;
    fn list_entries(&self, inventory_id: Option<ItemId>) -> Result<Vec<LedgerEntry>, StoreError>;
    fn put_entry(&self, entry: LedgerEntry) -> Result<(), StoreError>;
    /// Returns whether a record was actually removed.
    fn delete_entry(&self, id: EntryId) -> Result<bool, StoreError>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn get_item(&self, id: ItemId) -> Result<Option<InventoryItem>, StoreError> {
        (**self).get_item(id)
    }

    fn put_item(&self, item: InventoryItem) -> Result<(), StoreError> {
        (**self).put_item(item)
    }

    fn delete_item(&self, id: ItemId) -> Result<bool, StoreError> {
        (**self).delete_item(id)
    }
}

impl<S> LedgerStore for Arc<S>
where
    S: LedgerStore + ?Sized,
{
    fn get_entry(&self, id: EntryId) -> Result<Option<LedgerEntry>, StoreError> {
        (**self).get_entry(id)
    }

    fn list_entries(&self, inventory_id: Option<ItemId>) -> Result<Vec<LedgerEntry>, StoreError> {
        (**self).list_entries(inventory_id)
    }

    fn put_entry(&self, entry: LedgerEntry) -> Result<(), StoreError> {
        (**self).put_entry(entry)
    }

    fn delete_entry(&self, id: EntryId) -> Result<bool, StoreError> {
        (**self).delete_entry(id)
    }
}
