//! Hold order submission
//!
//! A hold order parks the cart on the server as an open transaction
//! (type [`HOLD_TRAN_TYPE`]) so it can be settled later from the table.
//! On success the ticket is printed; a printer problem is logged and
//! never fails the order.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use hotel_client::{HotelApi, HttpClient};
use hotel_printer::{PrintError, Printer};
use rust_decimal::Decimal;
use shared::dto::{TransactionCreateDto, TransactionItemDto, TransactionPaymentDto};
use shared::models::OutletSummary;
use tracing::{error, info, instrument, warn};

use crate::cart::Cart;
use crate::error::OrderError;
use crate::ticket::OrderTicketRenderer;

/// Transaction type code of a held order
pub const HOLD_TRAN_TYPE: i32 = 75;

/// Payment method of the synthetic payment line on a held order
pub const HOLD_PAYMENT_METHOD: &str = "HOLD";

pub fn hold_doc_no(now: DateTime<Utc>) -> String {
    format!("HLD-{}", now.timestamp_millis())
}

/// Where a hold order is going
#[derive(Debug, Clone, Copy)]
pub struct HoldTarget<'a> {
    pub hotel_id: i64,
    pub outlet: &'a OutletSummary,
    pub table_no: Option<&'a str>,
    pub delivery_method: Option<&'a str>,
}

/// Build the transaction payload for holding `cart`
pub fn build_hold_payload(
    cart: &Cart,
    target: HoldTarget<'_>,
    now: DateTime<Utc>,
) -> Result<TransactionCreateDto, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }
    if let Some(other) = cart.foreign_outlet(target.outlet.id) {
        return Err(OrderError::OutletMismatch {
            cart: other,
            selected: target.outlet.id,
        });
    }

    let items: Vec<TransactionItemDto> = cart
        .items()
        .iter()
        .map(|line| TransactionItemDto {
            item_id: line.product.id,
            item_name: line.product.name.clone(),
            qty: line.quantity,
            price: line.product.price,
            amount: line.line_total(),
        })
        .collect();
    let total: Decimal = items.iter().map(|i| i.amount).sum();

    Ok(TransactionCreateDto {
        tran_type_id: HOLD_TRAN_TYPE,
        doc_no: hold_doc_no(now),
        tran_date: now.to_rfc3339(),
        hotel_id: target.hotel_id,
        pos_center_id: target.outlet.id,
        table_no: target.table_no.map(str::to_string),
        delivery_method: target.delivery_method.map(str::to_string),
        tran_value: total,
        items,
        payments: vec![TransactionPaymentDto {
            payment_method: HOLD_PAYMENT_METHOD.to_string(),
            amount: total,
            currency_code: Some(target.outlet.currency.clone()),
        }],
    })
}

/// Outcome of a successful hold
#[derive(Debug, Clone, PartialEq)]
pub struct HoldReceipt {
    pub transaction_id: i64,
    pub doc_no: String,
    pub total: Decimal,
    pub printed: bool,
}

/// Resets the in-flight flag when the submission ends, however it ends
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Submits hold orders and prints their tickets
pub struct OrderSubmitter<P> {
    printer: Option<P>,
    renderer: OrderTicketRenderer,
    in_flight: AtomicBool,
}

impl<P: Printer> OrderSubmitter<P> {
    pub fn new(printer: Option<P>, paper_width: usize) -> Self {
        Self {
            printer,
            renderer: OrderTicketRenderer::new(paper_width),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn renderer(&self) -> &OrderTicketRenderer {
        &self.renderer
    }

    /// POST the payload once; no retry
    ///
    /// Clearing the cart is left to the caller and should happen only on
    /// `Ok`, so a failed order can be resubmitted as is.
    #[instrument(skip_all, fields(doc_no = %payload.doc_no, total = %payload.tran_value))]
    pub async fn submit_hold<C: HttpClient>(
        &self,
        api: &HotelApi<C>,
        payload: &TransactionCreateDto,
        outlet_name: &str,
    ) -> Result<HoldReceipt, OrderError> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            warn!("hold rejected, another submission is in flight");
            return Err(OrderError::AlreadySubmitting);
        }
        let _guard = InFlight(&self.in_flight);

        let created = api.create_transaction(payload).await.map_err(|e| {
            error!(error = %e.message(), "hold order failed");
            OrderError::Client(e)
        })?;
        info!(transaction_id = created.tran_mas_id, "hold order created");

        let printed = match self.print_ticket(payload, outlet_name).await {
            Ok(()) => true,
            Err(PrintError::NotConfigured) => false,
            Err(e) => {
                warn!(error = %e, "order ticket not printed");
                false
            }
        };

        Ok(HoldReceipt {
            transaction_id: created.tran_mas_id,
            doc_no: created.doc_no,
            total: payload.tran_value,
            printed,
        })
    }

    async fn print_ticket(
        &self,
        payload: &TransactionCreateDto,
        outlet_name: &str,
    ) -> Result<(), PrintError> {
        let printer = self.printer.as_ref().ok_or(PrintError::NotConfigured)?;
        let data = self.renderer.render(payload, outlet_name).build();
        printer.print(&data).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use shared::models::TaxConfig;

    use super::*;
    use crate::cart::tests::product;
    use crate::tax::TaxEngine;

    fn outlet() -> OutletSummary {
        OutletSummary {
            id: 4,
            name: "Pool Bar".into(),
            currency: "LKR".into(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()
    }

    #[test]
    fn test_payload_matches_cart() {
        let mut cart = Cart::new();
        cart.add(product(1, "Tea", Decimal::new(1000, 2)), 4);
        cart.add(product(1, "Tea", Decimal::new(1000, 2)), 4);
        cart.add(product(2, "Cake", Decimal::new(550, 2)), 4);

        let summary = outlet();
        let target = HoldTarget {
            hotel_id: 1,
            outlet: &summary,
            table_no: Some("T7"),
            delivery_method: None,
        };
        let payload = build_hold_payload(&cart, target, now()).unwrap();

        assert_eq!(payload.tran_type_id, HOLD_TRAN_TYPE);
        assert_eq!(payload.doc_no, "HLD-1700000000123");
        assert_eq!(payload.items.len(), cart.len());
        assert_eq!(payload.tran_value, cart.subtotal());
        assert_eq!(payload.payments.len(), 1);
        assert_eq!(payload.payments[0].payment_method, "HOLD");
        assert_eq!(payload.payments[0].amount, cart.subtotal());
        assert_eq!(payload.items[0].qty, 2);
        assert_eq!(payload.items[0].amount, Decimal::new(2000, 2));
        assert_eq!(payload.table_no.as_deref(), Some("T7"));
    }

    #[test]
    fn test_stub_total_equals_submitted_total() {
        let mut cart = Cart::new();
        cart.add(product(1, "Espresso", Decimal::new(1125, 3)), 4);

        let summary = outlet();
        let target = HoldTarget {
            hotel_id: 1,
            outlet: &summary,
            table_no: None,
            delivery_method: None,
        };
        let payload = build_hold_payload(&cart, target, now()).unwrap();
        let breakdown = TaxEngine::default().breakdown(cart.subtotal(), &TaxConfig::default());

        assert_eq!(payload.tran_value, cart.subtotal());
        assert_eq!(breakdown.grand_total, payload.tran_value);
        assert_eq!(payload.payments[0].amount, breakdown.grand_total);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let summary = outlet();
        let target = HoldTarget {
            hotel_id: 1,
            outlet: &summary,
            table_no: None,
            delivery_method: None,
        };
        let err = build_hold_payload(&Cart::new(), target, now()).unwrap_err();
        assert!(matches!(err, OrderError::EmptyCart));
    }

    #[test]
    fn test_foreign_outlet_lines_rejected() {
        let mut cart = Cart::new();
        cart.add(product(1, "Tea", Decimal::ONE), 9);
        let summary = outlet();
        let target = HoldTarget {
            hotel_id: 1,
            outlet: &summary,
            table_no: None,
            delivery_method: None,
        };
        let err = build_hold_payload(&cart, target, now()).unwrap_err();
        assert!(matches!(err, OrderError::OutletMismatch { cart: 9, selected: 4 }));
    }
}
