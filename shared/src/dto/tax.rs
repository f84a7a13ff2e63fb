//! Outlet tax configuration DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax rates of one outlet as returned by `GET tax-configs`
///
/// All rates are percentages. A missing rate means the component is not
/// charged at that outlet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxConfigDto {
    #[serde(rename = "posCenterID")]
    pub pos_center_id: i64,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub service_charge: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub tdl: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub sscl: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub vat: Option<Decimal>,
}
