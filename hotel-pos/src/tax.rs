//! Tax breakdown
//!
//! Two modes. `Stub` reports every component as zero and passes the
//! subtotal through untouched, so the grand total is exactly what gets
//! submitted; this is what terminals run today. `Cascade` applies the
//! outlet's rates one on top of the other:
//!
//! ```text
//! service charge = subtotal                      * sc%
//! TDL            = (subtotal + sc)               * tdl%
//! SSCL           = (subtotal + sc + tdl)         * sscl%
//! VAT            = (subtotal + sc + tdl + sscl)  * vat%
//! ```
//!
//! Each component is rounded half-up to cents before feeding the next; the
//! subtotal itself is never rounded.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use shared::models::TaxConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxMode {
    #[default]
    Stub,
    Cascade,
}

impl FromStr for TaxMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stub" | "" => Ok(Self::Stub),
            "cascade" => Ok(Self::Cascade),
            other => Err(format!("unknown tax mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxComponent {
    ServiceCharge,
    Tdl,
    Sscl,
    Vat,
}

impl TaxComponent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ServiceCharge => "Service Charge",
            Self::Tdl => "TDL",
            Self::Sscl => "SSCL",
            Self::Vat => "VAT",
        }
    }
}

impl fmt::Display for TaxComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub subtotal: Decimal,
    pub service_charge: Decimal,
    pub tdl: Decimal,
    pub sscl: Decimal,
    pub vat: Decimal,
    pub grand_total: Decimal,
}

impl TaxBreakdown {
    /// Component lines in display order
    pub fn lines(&self) -> [(TaxComponent, Decimal); 4] {
        [
            (TaxComponent::ServiceCharge, self.service_charge),
            (TaxComponent::Tdl, self.tdl),
            (TaxComponent::Sscl, self.sscl),
            (TaxComponent::Vat, self.vat),
        ]
    }

    pub fn total_tax(&self) -> Decimal {
        self.service_charge + self.tdl + self.sscl + self.vat
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TaxEngine {
    mode: TaxMode,
}

impl TaxEngine {
    pub fn new(mode: TaxMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> TaxMode {
        self.mode
    }

    pub fn breakdown(&self, subtotal: Decimal, config: &TaxConfig) -> TaxBreakdown {
        match self.mode {
            TaxMode::Stub => TaxBreakdown {
                subtotal,
                service_charge: zero_cents(),
                tdl: zero_cents(),
                sscl: zero_cents(),
                vat: zero_cents(),
                grand_total: subtotal,
            },
            TaxMode::Cascade => {
                let service_charge = percent_of(subtotal, config.service_charge);
                let tdl = percent_of(subtotal + service_charge, config.tdl);
                let sscl = percent_of(subtotal + service_charge + tdl, config.sscl);
                let vat = percent_of(subtotal + service_charge + tdl + sscl, config.vat);
                TaxBreakdown {
                    subtotal,
                    service_charge,
                    tdl,
                    sscl,
                    vat,
                    grand_total: subtotal + service_charge + tdl + sscl + vat,
                }
            }
        }
    }
}

fn zero_cents() -> Decimal {
    Decimal::new(0, 2)
}

fn cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn percent_of(base: Decimal, rate: Decimal) -> Decimal {
    cents(base * rate / Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> TaxConfig {
        TaxConfig {
            outlet_id: 1,
            service_charge: Decimal::from(10),
            tdl: Decimal::from(1),
            sscl: Decimal::new(25, 1),
            vat: Decimal::from(18),
        }
    }

    #[test]
    fn test_stub_is_subtotal() {
        let b = TaxEngine::default().breakdown(Decimal::new(2550, 2), &rates());
        assert_eq!(b.grand_total, Decimal::new(2550, 2));
        assert_eq!(b.total_tax(), Decimal::ZERO);
        for (_, amount) in b.lines() {
            assert_eq!(amount.to_string(), "0.00");
        }
        assert_eq!(b.grand_total.to_string(), "25.50");
    }

    #[test]
    fn test_stub_keeps_sub_cent_subtotal() {
        let subtotal = Decimal::new(1125, 3);
        let b = TaxEngine::default().breakdown(subtotal, &rates());
        assert_eq!(b.subtotal, subtotal);
        assert_eq!(b.grand_total, subtotal);
        assert_eq!(b.grand_total.to_string(), "1.125");
    }

    #[test]
    fn test_cascade_compounds() {
        let b = TaxEngine::new(TaxMode::Cascade).breakdown(Decimal::from(100), &rates());
        assert_eq!(b.service_charge, Decimal::new(1000, 2));
        assert_eq!(b.tdl, Decimal::new(110, 2));
        // 111.10 * 2.5% = 2.7775
        assert_eq!(b.sscl, Decimal::new(278, 2));
        // 113.88 * 18% = 20.4984
        assert_eq!(b.vat, Decimal::new(2050, 2));
        assert_eq!(b.grand_total, Decimal::new(13438, 2));
    }

    #[test]
    fn test_cascade_without_rates_is_subtotal() {
        let b = TaxEngine::new(TaxMode::Cascade).breakdown(Decimal::new(999, 2), &TaxConfig::default());
        assert_eq!(b.grand_total, Decimal::new(999, 2));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("cascade".parse::<TaxMode>().unwrap(), TaxMode::Cascade);
        assert_eq!("STUB".parse::<TaxMode>().unwrap(), TaxMode::Stub);
        assert!("flat".parse::<TaxMode>().is_err());
        assert_eq!(TaxComponent::Sscl.to_string(), "SSCL");
    }
}
