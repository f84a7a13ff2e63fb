//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::ItemMasterDto;

/// Sellable product from the item master (read-only on the client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Item code, unique per hotel
    pub code: Option<String>,
}

impl From<ItemMasterDto> for Product {
    fn from(dto: ItemMasterDto) -> Self {
        Self {
            id: dto.item_id,
            name: dto.item_name,
            // Unpriced items are open-price, sold at zero until overridden
            price: dto.price.unwrap_or_default(),
            category_id: dto.category_id,
            category_name: dto.category_name,
            description: dto.description.filter(|d| !d.is_empty()),
            image: dto.image_url.filter(|u| !u.is_empty()),
            code: dto.item_code.filter(|c| !c.is_empty()),
        }
    }
}
