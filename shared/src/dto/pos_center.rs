//! POS center (outlet) master DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// POS center row as returned by `GET pos-centers`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosCenterDto {
    #[serde(rename = "posCenterID")]
    pub pos_center_id: i64,
    #[serde(default)]
    pub pos_center_name: String,
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Service charge percentage
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub service_charge: Option<Decimal>,
}
