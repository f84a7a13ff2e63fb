//! Dining table helpers

use shared::models::{DiningTable, Product, TableStatus};

use crate::cart::Cart;

/// Cart-side view of a dining table
pub trait TableExt {
    /// Build a cart from the table's stored order without touching the live cart
    fn to_cart(&self, outlet_id: i64) -> Cart;

    fn is_available(&self) -> bool;

    /// Transaction already open on the table, if any
    fn open_transaction(&self) -> Option<i64>;
}

impl TableExt for DiningTable {
    fn to_cart(&self, outlet_id: i64) -> Cart {
        let mut cart = Cart::new();
        for line in &self.items {
            let product = Product {
                id: line.product_id,
                name: line.name.clone(),
                price: line.price,
                category_id: 0,
                category_name: None,
                description: None,
                image: None,
                code: None,
            };
            cart.add_quantity(product, outlet_id, line.quantity);
        }
        cart
    }

    fn is_available(&self) -> bool {
        self.status == TableStatus::Available
    }

    fn open_transaction(&self) -> Option<i64> {
        self.running_order
            .as_ref()
            .and_then(|order| order.transaction_id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rust_decimal::Decimal;
    use shared::models::{RunningOrder, TableLine};

    use super::*;

    pub(crate) fn occupied_table() -> DiningTable {
        DiningTable {
            id: 7,
            number: "T7".into(),
            status: TableStatus::Occupied,
            running_order: Some(RunningOrder {
                item_count: 3,
                total: Decimal::new(2550, 2),
                transaction_id: Some(901),
            }),
            items: vec![
                TableLine {
                    product_id: 1,
                    name: "Tea".into(),
                    price: Decimal::new(1000, 2),
                    quantity: 2,
                },
                TableLine {
                    product_id: 2,
                    name: "Cake".into(),
                    price: Decimal::new(550, 2),
                    quantity: 1,
                },
            ],
        }
    }

    #[test]
    fn test_to_cart_rebuilds_lines() {
        let table = occupied_table();
        let cart = table.to_cart(4);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal(), Decimal::new(2550, 2));
        assert!(cart.items().iter().all(|item| item.outlet_id == 4));
        assert_eq!(table.open_transaction(), Some(901));
        assert!(!table.is_available());
    }

    #[test]
    fn test_zero_quantity_lines_are_skipped() {
        let mut table = occupied_table();
        table.items[1].quantity = 0;
        assert_eq!(table.to_cart(4).len(), 1);
    }
}
