//! Printer errors

use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrintError {
    /// TCP connect refused or reset
    #[error("Cannot reach printer at {addr}: {reason}")]
    Connection { addr: SocketAddr, reason: String },

    #[error("Printer at {0} did not answer in time")]
    Timeout(SocketAddr),

    /// Write to an open connection failed
    #[error("Printer I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Printer reports itself unavailable
    #[error("Printer offline: {0}")]
    Offline(String),

    #[error("Invalid printer address: {0}")]
    InvalidAddress(String),

    /// No kitchen/ticket printer configured for this terminal
    #[error("No printer configured")]
    NotConfigured,
}

pub type PrintResult<T> = Result<T, PrintError>;
