use std::collections::HashMap;
use std::sync::RwLock;

use stocktrail_core::{EntryId, ItemId};
use stocktrail_ledger::{InventoryItem, LedgerEntry};

use crate::stores::{ItemStore, LedgerStore, StoreError};

/// In-memory item + ledger store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: RwLock<HashMap<ItemId, InventoryItem>>,
    entries: RwLock<HashMap<EntryId, LedgerEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for InMemoryStore {
    fn get_item(&self, id: ItemId) -> Result<Option<InventoryItem>, StoreError> {
        let items = self.items.read().map_err(|_| StoreError::Poisoned)?;
        Ok(items.get(&id).cloned())
    }

    fn put_item(&self, item: InventoryItem) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_| StoreError::Poisoned)?;
        items.insert(item.id, item);
        Ok(())
    }

    fn delete_item(&self, id: ItemId) -> Result<bool, StoreError> {
        let mut items = self.items.write().map_err(|_| StoreError::Poisoned)?;
        Ok(items.remove(&id).is_some())
    }
}

impl LedgerStore for InMemoryStore {
    fn get_entry(&self, id: EntryId) -> Result<Option<LedgerEntry>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(&id).cloned())
    }

    fn list_entries(&self, inventory_id: Option<ItemId>) -> Result<Vec<LedgerEntry>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries
            .values()
            .filter(|e| inventory_id.is_none_or(|id| e.inventory_id == id))
            .cloned()
            .collect())
    }

    fn put_entry(&self, entry: LedgerEntry) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(entry.id, entry);
        Ok(())
    }

    fn delete_entry(&self, id: EntryId) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.remove(&id).is_some())
    }
}
