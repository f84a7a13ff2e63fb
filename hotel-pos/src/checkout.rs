//! Table and checkout staging
//!
//! [`Staging`] is the transient state between picking a table and
//! submitting: the staged table and, once checkout starts, a
//! [`CheckoutFlow`]. Both are dropped after submission, on cancel, and when
//! the outlet changes.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{DiningTable, TaxConfig};
use tracing::debug;

use crate::cart::Cart;
use crate::table::TableExt;
use crate::tax::{TaxBreakdown, TaxEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMethod {
    DineIn,
    Takeaway,
    RoomService,
    Delivery,
}

impl DeliveryMethod {
    /// Wire value sent as `deliveryMethod`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DineIn => "DINE_IN",
            Self::Takeaway => "TAKEAWAY",
            Self::RoomService => "ROOM_SERVICE",
            Self::Delivery => "DELIVERY",
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutScreen {
    DeliveryChoice,
    Payment,
    Completion,
}

/// Data collected across the checkout screens
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutStaging {
    pub cart: Cart,
    pub subtotal: Decimal,
    pub table_no: Option<String>,
    pub delivery_method: Option<DeliveryMethod>,
    /// Room number, address or note
    pub delivery_details: Option<String>,
    /// Transaction already open on the table
    pub transaction_id: Option<i64>,
}

/// Three-screen checkout
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    screen: CheckoutScreen,
    staging: CheckoutStaging,
}

impl CheckoutFlow {
    /// Snapshot the cart (and the staged table) and open the first screen
    pub fn start(cart: &Cart, table: Option<&DiningTable>) -> Self {
        Self {
            screen: CheckoutScreen::DeliveryChoice,
            staging: CheckoutStaging {
                cart: cart.clone(),
                subtotal: cart.subtotal(),
                table_no: table.map(|t| t.number.clone()),
                delivery_method: table.map(|_| DeliveryMethod::DineIn),
                delivery_details: None,
                transaction_id: table.and_then(|t| t.open_transaction()),
            },
        }
    }

    pub fn screen(&self) -> CheckoutScreen {
        self.screen
    }

    pub fn staging(&self) -> &CheckoutStaging {
        &self.staging
    }

    pub fn choose_delivery(&mut self, method: DeliveryMethod, details: Option<String>) {
        self.staging.delivery_method = Some(method);
        self.staging.delivery_details = details;
    }

    /// Advance one screen; stays on `Completion`
    pub fn next(&mut self) -> CheckoutScreen {
        self.screen = match self.screen {
            CheckoutScreen::DeliveryChoice => CheckoutScreen::Payment,
            CheckoutScreen::Payment | CheckoutScreen::Completion => CheckoutScreen::Completion,
        };
        debug!(screen = ?self.screen, "checkout advanced");
        self.screen
    }

    /// Re-open the previous screen with the staged data as it was
    pub fn back(&mut self) -> CheckoutScreen {
        self.screen = match self.screen {
            CheckoutScreen::Completion => CheckoutScreen::Payment,
            CheckoutScreen::Payment | CheckoutScreen::DeliveryChoice => {
                CheckoutScreen::DeliveryChoice
            }
        };
        self.screen
    }

    pub fn breakdown(&self, engine: &TaxEngine, config: &TaxConfig) -> TaxBreakdown {
        engine.breakdown(self.staging.subtotal, config)
    }

    /// Finish and hand over the collected data
    pub fn finish(self) -> CheckoutStaging {
        self.staging
    }
}

/// Staged table plus any checkout in progress
#[derive(Debug, Clone, Default)]
pub struct Staging {
    table: Option<DiningTable>,
    checkout: Option<CheckoutFlow>,
}

impl Staging {
    pub fn stage_table(&mut self, table: DiningTable) {
        self.table = Some(table);
    }

    pub fn table(&self) -> Option<&DiningTable> {
        self.table.as_ref()
    }

    /// Open checkout over `cart`; replaces a checkout already open
    pub fn begin_checkout(&mut self, cart: &Cart) -> &mut CheckoutFlow {
        self.checkout.insert(CheckoutFlow::start(cart, self.table.as_ref()))
    }

    pub fn checkout(&self) -> Option<&CheckoutFlow> {
        self.checkout.as_ref()
    }

    pub fn checkout_mut(&mut self) -> Option<&mut CheckoutFlow> {
        self.checkout.as_mut()
    }

    /// Drop the checkout but keep the staged table
    pub fn cancel_checkout(&mut self) {
        self.checkout = None;
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_none() && self.checkout.is_none()
    }

    pub fn clear(&mut self) {
        self.table = None;
        self.checkout = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::tests::product;
    use crate::table::tests::occupied_table;
    use crate::tax::TaxMode;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(product(1, "Tea", Decimal::new(1000, 2)), 4);
        cart.add(product(1, "Tea", Decimal::new(1000, 2)), 4);
        cart.add(product(2, "Cake", Decimal::new(550, 2)), 4);
        cart
    }

    #[test]
    fn test_screens_move_forward_and_back() {
        let mut flow = CheckoutFlow::start(&cart(), None);
        assert_eq!(flow.screen(), CheckoutScreen::DeliveryChoice);

        flow.choose_delivery(DeliveryMethod::RoomService, Some("Room 204".into()));
        assert_eq!(flow.next(), CheckoutScreen::Payment);
        assert_eq!(flow.next(), CheckoutScreen::Completion);
        assert_eq!(flow.next(), CheckoutScreen::Completion);

        assert_eq!(flow.back(), CheckoutScreen::Payment);
        assert_eq!(flow.back(), CheckoutScreen::DeliveryChoice);
        assert_eq!(flow.back(), CheckoutScreen::DeliveryChoice);

        // Going back keeps what was chosen
        assert_eq!(
            flow.staging().delivery_method,
            Some(DeliveryMethod::RoomService)
        );
        assert_eq!(flow.staging().delivery_details.as_deref(), Some("Room 204"));
    }

    #[test]
    fn test_snapshot_is_independent_of_cart() {
        let mut live = cart();
        let flow = CheckoutFlow::start(&live, None);
        live.clear();

        assert_eq!(flow.staging().cart.len(), 2);
        assert_eq!(flow.staging().subtotal, Decimal::new(2550, 2));
    }

    #[test]
    fn test_stub_breakdown_of_staged_cart() {
        let flow = CheckoutFlow::start(&cart(), None);
        let b = flow.breakdown(&TaxEngine::new(TaxMode::Stub), &TaxConfig::default());
        assert_eq!(b.subtotal, Decimal::new(2550, 2));
        assert_eq!(b.grand_total, Decimal::new(2550, 2));
        assert!(b.lines().iter().all(|(_, amount)| amount.is_zero()));
    }

    #[test]
    fn test_staged_table_feeds_checkout() {
        let mut staging = Staging::default();
        staging.stage_table(occupied_table());

        let flow = staging.begin_checkout(&cart());
        assert_eq!(flow.staging().table_no.as_deref(), Some("T7"));
        assert_eq!(flow.staging().transaction_id, Some(901));
        assert_eq!(flow.staging().delivery_method, Some(DeliveryMethod::DineIn));

        staging.cancel_checkout();
        assert!(staging.checkout().is_none());
        assert!(staging.table().is_some());

        staging.clear();
        assert!(staging.is_empty());
    }

    #[test]
    fn test_finish_returns_staging() {
        let mut flow = CheckoutFlow::start(&cart(), None);
        flow.choose_delivery(DeliveryMethod::Takeaway, None);
        let staged = flow.finish();
        assert_eq!(staged.delivery_method.map(|m| m.as_str()), Some("TAKEAWAY"));
    }
}
