//! Cart store
//!
//! Lines are keyed by `(product id, outlet id)` and kept in insertion order,
//! which is the order they are displayed and printed in. Every operation is
//! synchronous and infallible; removing something that is not there is a
//! no-op.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::Product;

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    /// Always >= 1
    pub quantity: u32,
    pub outlet_id: i64,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }

    fn is(&self, product_id: i64, outlet_id: i64) -> bool {
        self.product.id == product_id && self.outlet_id == outlet_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product` under `outlet_id`
    pub fn add(&mut self, product: Product, outlet_id: i64) {
        self.add_quantity(product, outlet_id, 1);
    }

    /// Add `quantity` units at once (table reload, CLI); zero adds nothing
    pub fn add_quantity(&mut self, product: Product, outlet_id: i64, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self
            .items
            .iter_mut()
            .find(|item| item.is(product.id, outlet_id))
        {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem {
                product,
                quantity,
                outlet_id,
            }),
        }
    }

    /// Take one unit away; the line goes when its quantity would hit zero
    pub fn remove(&mut self, product_id: i64, outlet_id: i64) {
        if let Some(pos) = self.position(product_id, outlet_id) {
            if self.items[pos].quantity > 1 {
                self.items[pos].quantity -= 1;
            } else {
                self.items.remove(pos);
            }
        }
    }

    pub fn remove_completely(&mut self, product_id: i64, outlet_id: i64) {
        self.items.retain(|item| !item.is(product_id, outlet_id));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.quantity))
    }

    /// First line whose outlet differs from `outlet_id`
    pub fn foreign_outlet(&self, outlet_id: i64) -> Option<i64> {
        self.items
            .iter()
            .map(|item| item.outlet_id)
            .find(|id| *id != outlet_id)
    }

    fn position(&self, product_id: i64, outlet_id: i64) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.is(product_id, outlet_id))
    }
}
