//! Printer adapters for sending ESC/POS data
//!
//! - [`NetworkPrinter`]: raw TCP on port 9100
//! - [`CapturePrinter`]: keeps jobs in memory (tests, `--dry-run`)

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument, warn};

use crate::error::{PrintError, PrintResult};

const DEFAULT_PORT: u16 = 9100;

/// Trait for printer adapters
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send raw ESC/POS data to the printer
    async fn print(&self, data: &[u8]) -> PrintResult<()>;

    /// Check if the printer is reachable
    async fn is_online(&self) -> bool;
}

/// Network printer (TCP port 9100)
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    timeout: Duration,
}

impl NetworkPrinter {
    /// Parse `host:port`, or a bare host on port 9100
    pub fn from_addr(addr: &str) -> PrintResult<Self> {
        let addr = addr.trim();
        let parsed = addr
            .parse::<SocketAddr>()
            .or_else(|_| format!("{}:{}", addr, DEFAULT_PORT).parse::<SocketAddr>())
            .map_err(|_| PrintError::InvalidAddress(addr.to_string()))?;

        Ok(Self {
            addr: parsed,
            timeout: Duration::from_secs(5),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Printer for NetworkPrinter {
    #[instrument(skip(self, data), fields(addr = %self.addr, bytes = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        let mut stream = tokio::time::timeout(self.timeout, TcpStream::connect(self.addr))
            .await
            .map_err(|_| PrintError::Timeout(self.addr))?
            .map_err(|e| PrintError::Connection {
                addr: self.addr,
                reason: e.to_string(),
            })?;

        stream.write_all(data).await?;
        stream.flush().await?;

        info!("print job sent");
        Ok(())
    }

    #[instrument(skip(self), fields(addr = %self.addr))]
    async fn is_online(&self) -> bool {
        match tokio::time::timeout(Duration::from_millis(500), TcpStream::connect(self.addr)).await
        {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                warn!(error = %e, "printer offline");
                false
            }
            Err(_) => {
                warn!("printer check timeout");
                false
            }
        }
    }
}

/// In-memory printer
///
/// Clones share the same job list. An offline capture printer rejects
/// every job, which is how callers exercise print-failure paths.
#[derive(Debug, Clone, Default)]
pub struct CapturePrinter {
    jobs: Arc<Mutex<Vec<Vec<u8>>>>,
    offline: bool,
}

impl CapturePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Jobs received so far, oldest first
    pub fn jobs(&self) -> Vec<Vec<u8>> {
        self.jobs
            .lock()
            .map(|jobs| jobs.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Printer for CapturePrinter {
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        if self.offline {
            return Err(PrintError::Offline("capture printer".into()));
        }
        match self.jobs.lock() {
            Ok(mut jobs) => jobs.push(data.to_vec()),
            Err(poisoned) => poisoned.into_inner().push(data.to_vec()),
        }
        Ok(())
    }

    async fn is_online(&self) -> bool {
        !self.offline
    }
}
