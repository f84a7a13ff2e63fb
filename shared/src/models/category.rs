//! Category Model

use serde::{Deserialize, Serialize};

use crate::dto::CategoryDto;

/// Item category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Self {
            id: dto.category_id,
            name: dto.category_name,
            description: dto.description,
            is_active: dto.is_active,
        }
    }
}
