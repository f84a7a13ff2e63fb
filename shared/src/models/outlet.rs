//! Outlet (POS center) Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::PosCenterDto;

const DEFAULT_CURRENCY: &str = "LKR";

/// Sales outlet of a hotel (restaurant, bar, pool deck...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: i64,
    pub name: String,
    pub currency: String,
    /// Default service charge percentage
    pub service_charge_rate: Decimal,
}

impl Outlet {
    /// Denormalized summary kept next to the selected id
    pub fn summary(&self) -> OutletSummary {
        OutletSummary {
            id: self.id,
            name: self.name.clone(),
            currency: self.currency.clone(),
        }
    }
}

impl From<PosCenterDto> for Outlet {
    fn from(dto: PosCenterDto) -> Self {
        Self {
            id: dto.pos_center_id,
            name: dto.pos_center_name,
            currency: dto
                .currency_code
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            service_charge_rate: dto.service_charge.unwrap_or_default(),
        }
    }
}

/// Persisted summary of the selected outlet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutletSummary {
    pub id: i64,
    pub name: String,
    pub currency: String,
}
