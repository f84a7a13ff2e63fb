//! # hotel-pos
//!
//! Point-of-sale flow of a hotel outlet terminal: cart, outlet selection,
//! table and checkout staging, tax breakdown, hold orders with ticket
//! printing and bulk item import, over the hotel API in `hotel-client`.
//!
//! ```ignore
//! let api = HotelApi::connect(&config.client_config(&ctx))?;
//! let mut session = PosSession::new(api, ctx, path, OrderSubmitter::new(printer, 48), TaxEngine::default());
//! session.load_outlets().await;
//! session.select_outlet(4)?;
//! session.load_products().await;
//! session.add_item(12)?;
//! let receipt = session.hold().await?;
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod context;
pub mod error;
pub mod import;
pub mod logger;
pub mod order;
pub mod outlet;
pub mod session;
pub mod table;
pub mod tax;
pub mod ticket;

pub use cart::{Cart, CartItem};
pub use checkout::{CheckoutFlow, CheckoutScreen, CheckoutStaging, DeliveryMethod, Staging};
pub use config::PosConfig;
pub use context::AppContext;
pub use error::{ContextError, ImportError, OrderError, error_code_of};
pub use import::{ImportPlan, ImportReport, ImportRow};
pub use order::{HOLD_TRAN_TYPE, HoldReceipt, HoldTarget, OrderSubmitter, build_hold_payload};
pub use outlet::{OutletChange, OutletSelection, TaxSetupStatus};
pub use session::PosSession;
pub use table::TableExt;
pub use tax::{TaxBreakdown, TaxComponent, TaxEngine, TaxMode};
pub use ticket::OrderTicketRenderer;
