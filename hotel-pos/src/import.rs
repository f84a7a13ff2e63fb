//! Bulk item import
//!
//! Takes rows that were already read from a sheet, creates the categories
//! they name that do not exist yet, and creates the items in one bulk call.
//! Item codes are unique per hotel: a row is skipped when its code is
//! already on the server or appeared earlier in the same batch. Codes and
//! category names compare trimmed and case-insensitively.

use std::collections::{HashMap, HashSet};

use hotel_client::{Categories, HotelApi, HttpClient, Items};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::dto::{CategoryCreateDto, ItemCreateDto};
use shared::models::{Category, Product};
use tracing::{info, instrument, warn};

use crate::error::ImportError;

/// One parsed sheet row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRow {
    pub code: String,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

/// What an import will do, before anything is sent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportPlan {
    /// Category names to create, first-seen spelling
    pub new_categories: Vec<String>,
    /// Rows to create as items
    pub rows: Vec<ImportRow>,
    /// Codes skipped as duplicates
    pub skipped_codes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub categories_created: usize,
    pub items_created: usize,
    /// Duplicates found while planning plus codes the server refused
    pub skipped_codes: Vec<String>,
}

fn key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Validate rows and work out what to create
pub fn plan(
    rows: &[ImportRow],
    existing_items: &[Product],
    existing_categories: &[Category],
) -> Result<ImportPlan, ImportError> {
    if rows.is_empty() {
        return Err(ImportError::Empty);
    }

    let mut seen: HashSet<String> = existing_items
        .iter()
        .filter_map(|p| p.code.as_deref())
        .map(key)
        .collect();
    let mut categories: HashSet<String> =
        existing_categories.iter().map(|c| key(&c.name)).collect();
    let mut plan = ImportPlan::default();

    for (idx, row) in rows.iter().enumerate() {
        let invalid = |reason: &str| ImportError::InvalidRow {
            row: idx + 1,
            reason: reason.to_string(),
        };
        if row.code.trim().is_empty() {
            return Err(invalid("missing item code"));
        }
        if row.name.trim().is_empty() {
            return Err(invalid("missing item name"));
        }
        if row.category.trim().is_empty() {
            return Err(invalid("missing category"));
        }
        if row.price.is_sign_negative() {
            return Err(invalid("negative price"));
        }

        if !seen.insert(key(&row.code)) {
            plan.skipped_codes.push(row.code.trim().to_string());
            continue;
        }
        if categories.insert(key(&row.category)) {
            plan.new_categories.push(row.category.trim().to_string());
        }
        plan.rows.push(row.clone());
    }

    Ok(plan)
}

/// Fetch current items and categories, plan, then create
#[instrument(skip_all, fields(rows = rows.len()))]
pub async fn import_items<C: HttpClient>(
    api: &HotelApi<C>,
    rows: &[ImportRow],
) -> Result<ImportReport, ImportError> {
    let hotel_id = api.hotel_id().ok_or(ImportError::PropertyNotSelected)?;
    let existing_items = api.fetch(&Items).await?;
    let existing_categories = api.fetch(&Categories).await?;

    let plan = plan(rows, &existing_items, &existing_categories)?;
    submit(api, hotel_id, plan, &existing_categories).await
}

/// Send a plan: categories one by one, then items in bulk
pub async fn submit<C: HttpClient>(
    api: &HotelApi<C>,
    hotel_id: i64,
    plan: ImportPlan,
    existing_categories: &[Category],
) -> Result<ImportReport, ImportError> {
    let mut category_ids: HashMap<String, i64> = existing_categories
        .iter()
        .map(|c| (key(&c.name), c.id))
        .collect();

    let mut report = ImportReport {
        skipped_codes: plan.skipped_codes,
        ..ImportReport::default()
    };

    for name in &plan.new_categories {
        let created = api
            .create_category(&CategoryCreateDto {
                hotel_id,
                category_name: name.clone(),
                description: None,
            })
            .await?;
        category_ids.insert(key(name), created.id);
        report.categories_created += 1;
    }

    let mut items = Vec::with_capacity(plan.rows.len());
    for row in plan.rows {
        let Some(&category_id) = category_ids.get(&key(&row.category)) else {
            warn!(code = %row.code, category = %row.category, "category missing after create");
            report.skipped_codes.push(row.code);
            continue;
        };
        items.push(ItemCreateDto {
            hotel_id,
            item_code: row.code.trim().to_string(),
            item_name: row.name.trim().to_string(),
            category_id,
            price: row.price,
            description: row.description.filter(|d| !d.trim().is_empty()),
        });
    }

    if !items.is_empty() {
        let result = api.bulk_create_items(&items).await?;
        report.items_created = result.created;
        report.skipped_codes.extend(result.failed_codes);
    }

    info!(
        categories = report.categories_created,
        items = report.items_created,
        skipped = report.skipped_codes.len(),
        "import finished"
    );
    Ok(report)
}
