//! Outlet tax configuration Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::TaxConfigDto;

/// Tax rates (percent) applied at one outlet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxConfig {
    pub outlet_id: i64,
    pub service_charge: Decimal,
    /// Tourism development levy
    pub tdl: Decimal,
    /// Social security contribution levy
    pub sscl: Decimal,
    pub vat: Decimal,
}

impl From<TaxConfigDto> for TaxConfig {
    fn from(dto: TaxConfigDto) -> Self {
        Self {
            outlet_id: dto.pos_center_id,
            service_charge: dto.service_charge.unwrap_or_default(),
            tdl: dto.tdl.unwrap_or_default(),
            sscl: dto.sscl.unwrap_or_default(),
            vat: dto.vat.unwrap_or_default(),
        }
    }
}
