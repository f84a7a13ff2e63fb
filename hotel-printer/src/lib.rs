//! # hotel-printer
//!
//! ESC/POS thermal printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command building
//! - Windows-1252 encoding for Western receipt printers
//! - Network printing (TCP port 9100)
//! - In-memory capture for tests and dry runs
//!
//! WHAT to print (order tickets) stays in `hotel-pos`.
//!
//! ## Example
//!
//! ```ignore
//! use hotel_printer::{EscPosBuilder, NetworkPrinter, Printer};
//!
//! let mut builder = EscPosBuilder::new(48);
//! builder.center().double_size().line("ORDER").reset_size();
//! builder.sep_double().left();
//! builder.line_lr("Table", "T12");
//! builder.cut();
//!
//! let printer = NetworkPrinter::from_addr("192.168.1.100:9100")?;
//! printer.print(&builder.build()).await?;
//! ```

mod encoding;
mod error;
mod escpos;
mod printer;

// Re-exports
pub use encoding::{encode_cp1252, pad, text_width, truncate};
pub use error::{PrintError, PrintResult};
pub use escpos::EscPosBuilder;
pub use printer::{CapturePrinter, NetworkPrinter, Printer};
