//! Dining table DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Table row as returned by `GET tables`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDto {
    #[serde(rename = "tableID")]
    pub table_id: i64,
    #[serde(default)]
    pub table_no: String,
    /// `AVAILABLE`, `OCCUPIED` or `RESERVED`
    #[serde(default)]
    pub status: String,
    #[serde(rename = "posCenterID", default)]
    pub pos_center_id: Option<i64>,
    #[serde(default)]
    pub running_order: Option<RunningOrderDto>,
    #[serde(default)]
    pub items: Vec<TableItemDto>,
}

/// Summary of the order currently open on a table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningOrderDto {
    pub item_count: u32,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(rename = "tranMasID", default)]
    pub tran_mas_id: Option<i64>,
}

/// One line of the order currently open on a table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableItemDto {
    #[serde(rename = "itemID")]
    pub item_id: i64,
    #[serde(default)]
    pub item_name: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub qty: u32,
}
