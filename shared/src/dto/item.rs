//! Item master DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Item master row as returned by `GET items`
///
/// Only the id is required. A row with a blank name or price still loads
/// so one bad row never hides the rest of the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMasterDto {
    #[serde(rename = "itemID")]
    pub item_id: i64,
    #[serde(default)]
    pub item_name: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(rename = "categoryID", default)]
    pub category_id: i64,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub item_code: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Create item payload (bulk import)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCreateDto {
    #[serde(rename = "hotelID")]
    pub hotel_id: i64,
    pub item_code: String,
    pub item_name: String,
    #[serde(rename = "categoryID")]
    pub category_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Result of `POST items/bulk`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateResult {
    pub created: usize,
    #[serde(default)]
    pub failed_codes: Vec<String>,
}
