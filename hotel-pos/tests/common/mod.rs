// hotel-pos/tests/common/mod.rs
// In-process mock of the hotel API

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use hotel_client::{HotelApi, OneshotHttpClient};
use serde_json::{Value, json};
use shared::{ErrorCode, ProblemDetails};

/// Error reply in the hotel API's problem+json shape
type Failure = (StatusCode, Json<ProblemDetails>);

fn failure(status: StatusCode, code: ErrorCode, detail: &str) -> Failure {
    let mut body = ProblemDetails::with_code(code, detail);
    body.status = Some(status.as_u16());
    (status, Json(body))
}

#[derive(Clone, Default)]
pub struct MockApi {
    pub transactions: Arc<Mutex<Vec<Value>>>,
    pub categories: Arc<Mutex<Vec<Value>>>,
    pub bulk_items: Arc<Mutex<Vec<Value>>>,
    pub fail_transactions: bool,
    pub fail_outlets: bool,
    pub transaction_delay: Option<Duration>,
}

impl MockApi {
    pub fn router(&self) -> Router {
        Router::new()
            .route("/pos-centers", get(outlets))
            .route("/items", get(items))
            .route("/categories", get(categories).post(create_category))
            .route("/tax-configs", get(tax_configs))
            .route("/tables", get(tables))
            .route("/transactions", post(create_transaction))
            .route("/items/bulk", post(bulk_items))
            .with_state(self.clone())
    }

    pub fn api(&self, hotel_id: Option<i64>) -> HotelApi<OneshotHttpClient> {
        let http = OneshotHttpClient::new(self.router()).with_token("test-token");
        HotelApi::new(http, hotel_id)
    }

    pub fn transactions(&self) -> Vec<Value> {
        self.transactions.lock().unwrap().clone()
    }
}

async fn outlets(State(mock): State<MockApi>) -> Result<Json<Value>, Failure> {
    if mock.fail_outlets {
        return Err(failure(
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::NetworkError,
            "POS center master is locked",
        ));
    }
    Ok(Json(json!([
        {"posCenterID": 4, "posCenterName": "Pool Bar", "currencyCode": "LKR", "serviceCharge": 10.0},
        {"posCenterID": 5, "posCenterName": "Lobby Cafe", "currencyCode": "LKR"}
    ])))
}

async fn items() -> Json<Value> {
    Json(json!([
        {"itemID": 1, "itemName": "Tea", "price": 10.0, "categoryID": 2, "itemCode": "BEV-1"},
        {"itemID": 2, "itemName": "Cake", "price": 5.5, "categoryID": 3, "itemCode": "SNK-9"}
    ]))
}

async fn categories() -> Json<Value> {
    Json(json!([
        {"categoryID": 2, "categoryName": "Beverages"},
        {"categoryID": 3, "categoryName": "Snacks"}
    ]))
}

async fn tax_configs() -> Json<Value> {
    Json(json!([
        {"posCenterID": 4, "serviceCharge": 10.0, "tdl": 1.0, "sscl": 2.5, "vat": 18.0}
    ]))
}

async fn tables() -> Json<Value> {
    Json(json!([
        {"tableID": 7, "tableNo": "T7", "status": "AVAILABLE"},
        {"tableID": 8, "tableNo": "T8", "status": "OCCUPIED",
         "runningOrder": {"itemCount": 1, "total": 10.0, "tranMasID": 880},
         "items": [{"itemID": 1, "itemName": "Tea", "price": 10.0, "qty": 1}]}
    ]))
}

async fn create_transaction(
    State(mock): State<MockApi>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Failure> {
    if let Some(delay) = mock.transaction_delay {
        tokio::time::sleep(delay).await;
    }
    if mock.fail_transactions {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            ErrorCode::OrderSubmitFailed,
            "Posting period is closed",
        ));
    }
    let mut recorded = mock.transactions.lock().unwrap();
    recorded.push(body.clone());
    let id = 900 + recorded.len() as i64;
    Ok(Json(json!({"tranMasID": id, "docNo": body["docNo"]})))
}

async fn create_category(State(mock): State<MockApi>, Json(body): Json<Value>) -> Json<Value> {
    let mut created = mock.categories.lock().unwrap();
    created.push(body.clone());
    Json(json!({
        "categoryID": 50 + created.len() as i64,
        "categoryName": body["categoryName"]
    }))
}

async fn bulk_items(State(mock): State<MockApi>, Json(body): Json<Value>) -> Json<Value> {
    let rows = body.as_array().cloned().unwrap_or_default();
    let count = rows.len();
    mock.bulk_items.lock().unwrap().extend(rows);
    Json(json!({"created": count, "failedCodes": []}))
}
