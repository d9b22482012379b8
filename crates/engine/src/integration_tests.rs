//! Integration tests for the full reconciliation flow.
//!
//! Tests: request → engine → item store + ledger store
//!
//! Verifies:
//! - Order placement, fulfillment and direct adjustments compose over time
//! - Undo walks stock back deterministically through the remaining history
//! - The item-teardown ordering contract (entries first, then the item)
//! - The string-typed wire shape survives a full round trip

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use stocktrail_core::ItemId;
    use stocktrail_ledger::{EntryStatus, InventoryItem, PlaceOrder, StockUpdate};
    use stocktrail_store::{InMemoryStore, ItemStore, LedgerStore};

    use crate::engine::ReconciliationEngine;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn setup() -> (ReconciliationEngine<Arc<InMemoryStore>>, Arc<InMemoryStore>) {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let store = Arc::new(InMemoryStore::new());
        (ReconciliationEngine::new(Arc::clone(&store)), store)
    }

    fn seed_item(store: &InMemoryStore, stock: &str) -> ItemId {
        let item = InventoryItem {
            id: ItemId::new(),
            name: "saline bags".to_string(),
            room: "b4".to_string(),
            price: "12.00".to_string(),
            stock_up: "40".to_string(),
            vendor: "acme".to_string(),
            method: "online".to_string(),
            department: "er".to_string(),
            units: "bag".to_string(),
            stock_on_hand: d(stock),
        };
        store.put_item(item.clone()).unwrap();
        item.id
    }

    fn receive(qty: &str, pending: Option<stocktrail_core::EntryId>) -> StockUpdate {
        StockUpdate {
            actual_received: Some(d(qty)),
            new_stock: None,
            notes: None,
            employee_name: None,
            pending_order_id: pending,
        }
    }

    #[test]
    fn order_receive_adjust_undo_lifecycle() {
        let (engine, store) = setup();
        let item_id = seed_item(&store, "10");

        // Two orders in flight; one gets fulfilled, one stays pending.
        let first_order = engine
            .place_order(PlaceOrder {
                inventory_id: item_id,
                ordered_quantity: Some(d("6")),
                notes: Some("weekly".to_string()),
                employee_name: Some("dana".to_string()),
            })
            .unwrap();
        let second_order = engine
            .place_order(PlaceOrder {
                inventory_id: item_id,
                ordered_quantity: Some(d("2.5")),
                notes: None,
                employee_name: None,
            })
            .unwrap();

        let fulfilled = engine
            .update_stock(item_id, receive("6", Some(first_order.id)))
            .unwrap();
        assert_eq!(fulfilled.item.stock_on_hand, d("16"));
        assert_eq!(fulfilled.transaction.id, first_order.id);

        // A stock count found shrinkage; correct downwards.
        let corrected = engine
            .update_stock(
                item_id,
                StockUpdate {
                    actual_received: None,
                    new_stock: Some(d("14.5")),
                    notes: Some("cycle count".to_string()),
                    employee_name: None,
                    pending_order_id: None,
                },
            )
            .unwrap();
        assert_eq!(corrected.transaction.actual_received, d("-1.5"));

        // History reads newest first. Fulfillment kept the first order's
        // original timestamp, so it stays the oldest entry.
        let history = engine.list_entries(Some(item_id)).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].id, corrected.transaction.id);
        assert_eq!(history[1].id, second_order.id);
        assert_eq!(history[1].status, EntryStatus::Pending);
        assert_eq!(history[2].id, first_order.id);

        // Undo the correction: stock returns to the fulfillment's snapshot.
        engine.delete_entry(corrected.transaction.id).unwrap();
        assert_eq!(
            store.get_item(item_id).unwrap().unwrap().stock_on_hand,
            d("16")
        );

        // Undo the fulfillment too: back to where the item started.
        engine.delete_entry(first_order.id).unwrap();
        assert_eq!(
            store.get_item(item_id).unwrap().unwrap().stock_on_hand,
            d("10")
        );

        // Only the untouched pending order remains.
        let remaining = engine.list_entries(Some(item_id)).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second_order.id);
    }

    #[test]
    fn item_teardown_deletes_entries_before_the_item() {
        let (engine, store) = setup();
        let item_id = seed_item(&store, "0");

        engine
            .update_stock(item_id, receive("3", None))
            .unwrap();
        engine
            .place_order(PlaceOrder {
                inventory_id: item_id,
                ordered_quantity: Some(d("1")),
                notes: None,
                employee_name: None,
            })
            .unwrap();

        // Caller obligation: sweep the ledger, then drop the item.
        for entry in engine.list_entries(Some(item_id)).unwrap() {
            engine.delete_entry(entry.id).unwrap();
        }
        assert!(store.list_entries(Some(item_id)).unwrap().is_empty());
        assert!(store.delete_item(item_id).unwrap());
    }

    #[test]
    fn entries_round_trip_through_the_text_typed_wire_shape() {
        let (engine, store) = setup();
        let item_id = seed_item(&store, "1.5");

        let outcome = engine.update_stock(item_id, receive("0.25", None)).unwrap();

        let json = serde_json::to_value(&outcome.transaction).unwrap();
        assert_eq!(json["actual_received"], serde_json::json!("0.25"));
        assert_eq!(json["previous_stock"], serde_json::json!("1.5"));
        assert_eq!(json["new_stock"], serde_json::json!("1.75"));
        assert_eq!(json["status"], serde_json::json!("completed"));

        let back: stocktrail_ledger::LedgerEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, outcome.transaction);
        assert_eq!(
            store.get_item(item_id).unwrap().unwrap().stock_on_hand,
            d("1.75")
        );
    }
}
