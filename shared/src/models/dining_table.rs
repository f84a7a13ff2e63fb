//! Dining Table Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::{RunningOrderDto, TableDto, TableItemDto};

/// Occupancy status of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
}

impl TableStatus {
    /// Parse the server's status string; unknown values count as available
    pub fn from_wire(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "OCCUPIED" => Self::Occupied,
            "RESERVED" => Self::Reserved,
            _ => Self::Available,
        }
    }
}

/// Dining table of an outlet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    pub number: String,
    pub status: TableStatus,
    pub running_order: Option<RunningOrder>,
    pub items: Vec<TableLine>,
}

/// Summary of the order currently open on a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningOrder {
    pub item_count: u32,
    pub total: Decimal,
    pub transaction_id: Option<i64>,
}

/// One stored line of a table's open order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableLine {
    pub product_id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl From<TableDto> for DiningTable {
    fn from(dto: TableDto) -> Self {
        Self {
            id: dto.table_id,
            number: dto.table_no,
            status: TableStatus::from_wire(&dto.status),
            running_order: dto.running_order.map(RunningOrder::from),
            items: dto.items.into_iter().map(TableLine::from).collect(),
        }
    }
}

impl From<RunningOrderDto> for RunningOrder {
    fn from(dto: RunningOrderDto) -> Self {
        Self {
            item_count: dto.item_count,
            total: dto.total,
            transaction_id: dto.tran_mas_id,
        }
    }
}

impl From<TableItemDto> for TableLine {
    fn from(dto: TableItemDto) -> Self {
        Self {
            product_id: dto.item_id,
            name: dto.item_name,
            price: dto.price,
            quantity: dto.qty,
        }
    }
}
