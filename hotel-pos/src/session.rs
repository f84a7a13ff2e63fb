//! POS session
//!
//! One terminal's state: context, cart, staging, prompt state and the
//! master-data slices. All mutation goes through `&mut self`, so there is
//! exactly one writer.

use std::path::PathBuf;

use chrono::Utc;
use hotel_client::{Categories, HotelApi, HttpClient, Items, Outlets, Slice, Tables, TaxConfigs};
use hotel_printer::Printer;
use shared::models::{Category, DiningTable, Outlet, Product, TaxConfig};
use tracing::{info, instrument};

use crate::cart::Cart;
use crate::checkout::{CheckoutFlow, Staging};
use crate::context::AppContext;
use crate::error::{ContextError, OrderError};
use crate::order::{HoldReceipt, HoldTarget, OrderSubmitter, build_hold_payload};
use crate::outlet::{OutletChange, OutletSelection, TaxSetupStatus};
use crate::tax::{TaxBreakdown, TaxEngine};

pub struct PosSession<C, P> {
    api: HotelApi<C>,
    context: AppContext,
    context_path: PathBuf,
    cart: Cart,
    staging: Staging,
    selection: OutletSelection,
    submitter: OrderSubmitter<P>,
    tax: TaxEngine,

    pub products: Slice<Vec<Product>>,
    pub categories: Slice<Vec<Category>>,
    pub outlets: Slice<Vec<Outlet>>,
    pub tax_configs: Slice<Vec<TaxConfig>>,
    pub tables: Slice<Vec<DiningTable>>,
}

impl<C: HttpClient, P: Printer> PosSession<C, P> {
    pub fn new(
        api: HotelApi<C>,
        context: AppContext,
        context_path: impl Into<PathBuf>,
        submitter: OrderSubmitter<P>,
        tax: TaxEngine,
    ) -> Self {
        Self {
            api,
            context,
            context_path: context_path.into(),
            cart: Cart::new(),
            staging: Staging::default(),
            selection: OutletSelection::new(),
            submitter,
            tax,
            products: Slice::default(),
            categories: Slice::default(),
            outlets: Slice::default(),
            tax_configs: Slice::default(),
            tables: Slice::default(),
        }
    }

    pub fn api(&self) -> &HotelApi<C> {
        &self.api
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn staging(&self) -> &Staging {
        &self.staging
    }

    pub fn selection(&self) -> &OutletSelection {
        &self.selection
    }

    pub fn save_context(&self) -> Result<(), ContextError> {
        self.context.save(&self.context_path)
    }

    /// Store the property (and its token) chosen at sign-in
    pub fn set_property(&mut self, hotel_id: i64, token: Option<String>) {
        let switched = self.context.hotel_id != Some(hotel_id);
        self.context.set_property(hotel_id, token);
        self.api.set_hotel(Some(hotel_id));
        if switched {
            self.cart.clear();
            self.staging.clear();
        }
    }

    // === Master data ===

    /// Load outlets; `true` means the outlet prompt should open now
    pub async fn load_outlets(&mut self) -> bool {
        self.outlets.load(self.api.fetch(&Outlets)).await;
        self.selection.on_outlets_loaded(&self.context)
    }

    pub async fn load_products(&mut self) -> bool {
        self.products.load(self.api.fetch(&Items)).await
    }

    pub async fn load_categories(&mut self) -> bool {
        self.categories.load(self.api.fetch(&Categories)).await
    }

    pub async fn load_tax_configs(&mut self) -> bool {
        self.tax_configs.load(self.api.fetch(&TaxConfigs)).await
    }

    /// Tables of the selected outlet
    pub async fn load_tables(&mut self) -> Result<bool, OrderError> {
        let outlet_id = self.require_outlet()?;
        Ok(self.tables.load(self.api.fetch(&Tables { outlet_id })).await)
    }

    // === Outlet ===

    pub fn selected_outlet(&self) -> Option<&Outlet> {
        let id = self.context.selected_outlet_id?;
        self.outlets.data().iter().find(|o| o.id == id)
    }

    pub fn select_outlet(&mut self, outlet_id: i64) -> Result<OutletChange, OrderError> {
        let outlet = self
            .outlets
            .data()
            .iter()
            .find(|o| o.id == outlet_id)
            .cloned()
            .ok_or(OrderError::OutletNotFound(outlet_id))?;

        let change = self.selection.select(
            &mut self.context,
            &outlet,
            &mut self.cart,
            &mut self.staging,
        );
        if matches!(change, OutletChange::Switched { .. }) {
            self.tables.set(Vec::new());
        }
        Ok(change)
    }

    pub fn defer_for_new_outlet(&mut self) {
        self.selection.defer_for_new_outlet(&mut self.context);
    }

    pub fn on_tax_setup_status(&mut self, status: TaxSetupStatus) {
        self.selection.on_tax_setup_status(&mut self.context, status);
    }

    fn require_outlet(&self) -> Result<i64, OrderError> {
        self.context
            .selected_outlet_id
            .ok_or(OrderError::OutletNotSelected)
    }

    // === Cart ===

    /// Add one unit of a loaded product under the selected outlet
    pub fn add_item(&mut self, product_id: i64) -> Result<(), OrderError> {
        self.add_items(product_id, 1)
    }

    pub fn add_items(&mut self, product_id: i64, quantity: u32) -> Result<(), OrderError> {
        let outlet_id = self.require_outlet()?;
        let product = self
            .products
            .data()
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
            .ok_or(OrderError::ProductNotFound(product_id))?;
        self.cart.add_quantity(product, outlet_id, quantity);
        Ok(())
    }

    pub fn remove_item(&mut self, product_id: i64) -> Result<(), OrderError> {
        let outlet_id = self.require_outlet()?;
        self.cart.remove(product_id, outlet_id);
        Ok(())
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // === Table and checkout ===

    /// Stage a loaded table by its number
    pub fn stage_table(&mut self, number: &str) -> Result<&DiningTable, OrderError> {
        let table = self
            .tables
            .data()
            .iter()
            .find(|t| t.number.eq_ignore_ascii_case(number.trim()))
            .cloned()
            .ok_or_else(|| OrderError::TableNotFound(number.to_string()))?;
        self.staging.stage_table(table);
        self.staging
            .table()
            .ok_or_else(|| OrderError::TableNotFound(number.to_string()))
    }

    pub fn begin_checkout(&mut self) -> Result<&mut CheckoutFlow, OrderError> {
        if self.cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        Ok(self.staging.begin_checkout(&self.cart))
    }

    pub fn checkout_mut(&mut self) -> Option<&mut CheckoutFlow> {
        self.staging.checkout_mut()
    }

    pub fn cancel_checkout(&mut self) {
        self.staging.cancel_checkout();
    }

    /// Tax rates of the selected outlet
    ///
    /// Without a tax configuration the outlet's own service charge applies
    /// and every other rate is zero.
    pub fn outlet_tax_config(&self) -> TaxConfig {
        let outlet_id = self.context.selected_outlet_id.unwrap_or_default();
        self.tax_configs
            .data()
            .iter()
            .find(|t| t.outlet_id == outlet_id)
            .cloned()
            .unwrap_or_else(|| TaxConfig {
                outlet_id,
                service_charge: self
                    .selected_outlet()
                    .map(|o| o.service_charge_rate)
                    .unwrap_or_default(),
                ..TaxConfig::default()
            })
    }

    /// Breakdown of the live cart
    pub fn tax_breakdown(&self) -> TaxBreakdown {
        self.tax
            .breakdown(self.cart.subtotal(), &self.outlet_tax_config())
    }

    // === Submission ===

    /// Hold the cart as an open order on the staged table (if any)
    ///
    /// On success the cart and staging are cleared. On failure both are
    /// left untouched so the same order can be sent again.
    #[instrument(skip(self), fields(lines = self.cart.len()))]
    pub async fn hold(&mut self) -> Result<HoldReceipt, OrderError> {
        let hotel_id = self
            .context
            .hotel_id
            .ok_or(OrderError::PropertyNotSelected)?;
        let outlet = self
            .context
            .selected_outlet
            .clone()
            .ok_or(OrderError::OutletNotSelected)?;

        let checkout = self.staging.checkout().map(|c| c.staging());
        let table_no = self.staging.table().map(|t| t.number.as_str());
        let delivery = checkout
            .and_then(|s| s.delivery_method)
            .map(|m| m.as_str());

        let payload = build_hold_payload(
            &self.cart,
            HoldTarget {
                hotel_id,
                outlet: &outlet,
                table_no,
                delivery_method: delivery,
            },
            Utc::now(),
        )?;

        let receipt = self
            .submitter
            .submit_hold(&self.api, &payload, &outlet.name)
            .await?;

        self.cart.clear();
        self.staging.clear();
        info!(doc_no = %receipt.doc_no, "cart cleared after hold");
        Ok(receipt)
    }
}
