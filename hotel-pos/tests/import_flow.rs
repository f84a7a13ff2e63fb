// hotel-pos/tests/import_flow.rs
// Bulk item import against the in-process mock API

mod common;

use common::MockApi;
use hotel_pos::import::import_items;
use hotel_pos::{ImportError, ImportRow};
use rust_decimal::Decimal;
use serde_json::json;

fn row(code: &str, name: &str, category: &str, price: i64) -> ImportRow {
    ImportRow {
        code: code.into(),
        name: name.into(),
        category: category.into(),
        price: Decimal::new(price, 2),
        description: None,
    }
}

#[tokio::test]
async fn test_import_creates_missing_categories_and_items() {
    let mock = MockApi::default();
    let api = mock.api(Some(1));

    let rows = vec![
        row("BEV-1", "Tea again", "Beverages", 1000),
        row("BEV-2", "Coffee", "beverages", 1200),
        row("DES-1", "Ice Cream", "Desserts", 650),
        row("DES-1", "Ice Cream (dup)", "Desserts", 650),
    ];
    let report = import_items(&api, &rows).await.unwrap();

    assert_eq!(report.categories_created, 1);
    assert_eq!(report.items_created, 2);
    assert_eq!(report.skipped_codes, vec!["BEV-1", "DES-1"]);

    let categories = mock.categories.lock().unwrap().clone();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["categoryName"], json!("Desserts"));
    assert_eq!(categories[0]["hotelID"], json!(1));

    let items = mock.bulk_items.lock().unwrap().clone();
    assert_eq!(items[0]["itemCode"], json!("BEV-2"));
    assert_eq!(items[0]["categoryID"], json!(2));
    assert_eq!(items[1]["itemCode"], json!("DES-1"));
    assert_eq!(items[1]["categoryID"], json!(51));
}

#[tokio::test]
async fn test_import_requires_property() {
    let mock = MockApi::default();
    let api = mock.api(None);
    let err = import_items(&api, &[row("A", "A", "Food", 100)]).await.unwrap_err();
    assert!(matches!(err, ImportError::PropertyNotSelected));
}

#[tokio::test]
async fn test_import_of_only_duplicates_sends_nothing() {
    let mock = MockApi::default();
    let api = mock.api(Some(1));
    let report = import_items(&api, &[row("snk-9", "Cake", "Snacks", 550)])
        .await
        .unwrap();

    assert_eq!(report.items_created, 0);
    assert_eq!(report.skipped_codes, vec!["snk-9"]);
    assert!(mock.bulk_items.lock().unwrap().is_empty());
    assert!(mock.categories.lock().unwrap().is_empty());
}
