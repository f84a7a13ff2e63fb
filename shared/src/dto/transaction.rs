//! Order transaction DTOs (`POST transactions`)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction-creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCreateDto {
    pub tran_type_id: i32,
    pub doc_no: String,
    /// RFC 3339 timestamp
    pub tran_date: String,
    #[serde(rename = "hotelID")]
    pub hotel_id: i64,
    #[serde(rename = "posCenterID")]
    pub pos_center_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub tran_value: Decimal,
    pub items: Vec<TransactionItemDto>,
    pub payments: Vec<TransactionPaymentDto>,
}

/// One line item of a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionItemDto {
    #[serde(rename = "itemID")]
    pub item_id: i64,
    pub item_name: String,
    pub qty: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Payment record attached to a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPaymentDto {
    pub payment_method: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

/// Server acknowledgement of a created transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCreatedDto {
    #[serde(rename = "tranMasID")]
    pub tran_mas_id: i64,
    pub doc_no: String,
}
