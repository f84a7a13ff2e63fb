//! Typed hotel API on top of an [`HttpClient`]

use shared::dto::{
    BulkCreateResult, CategoryCreateDto, CategoryDto, ItemCreateDto, TransactionCreateDto,
    TransactionCreatedDto,
};
use shared::models::Category;
use tracing::{info, instrument};

use crate::resource::{Resource, scoped_path};
use crate::{ClientConfig, ClientError, ClientResult, HttpClient, NetworkHttpClient};

/// Hotel API bound to one transport and one selected property
#[derive(Debug, Clone)]
pub struct HotelApi<C> {
    http: C,
    hotel_id: Option<i64>,
}

impl HotelApi<NetworkHttpClient> {
    /// Network API for a configuration (base URL, token, hotel, timeout)
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?, config.hotel_id))
    }
}

impl<C: HttpClient> HotelApi<C> {
    pub fn new(http: C, hotel_id: Option<i64>) -> Self {
        Self { http, hotel_id }
    }

    /// Change the property scope (after the user switches hotel)
    pub fn set_hotel(&mut self, hotel_id: Option<i64>) {
        self.hotel_id = hotel_id;
    }

    pub fn hotel_id(&self) -> Option<i64> {
        self.hotel_id
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    fn require_hotel(&self) -> ClientResult<i64> {
        self.hotel_id.ok_or(ClientError::PropertyNotSelected)
    }

    /// Fetch and normalize every row of a hotel-scoped resource
    #[instrument(skip(self, resource), fields(resource = R::NAME))]
    pub async fn fetch<R: Resource>(&self, resource: &R) -> ClientResult<Vec<R::Model>> {
        let hotel_id = self.require_hotel()?;
        let rows: Vec<R::Wire> = self.http.get(&scoped_path(resource, hotel_id)).await?;
        info!(count = rows.len(), "fetched");
        Ok(rows.into_iter().map(R::normalize).collect())
    }

    /// Create an order transaction (hold or checkout)
    #[instrument(skip(self, payload), fields(doc_no = %payload.doc_no))]
    pub async fn create_transaction(
        &self,
        payload: &TransactionCreateDto,
    ) -> ClientResult<TransactionCreatedDto> {
        self.http.post("transactions", payload).await
    }

    /// Create one category
    pub async fn create_category(&self, payload: &CategoryCreateDto) -> ClientResult<Category> {
        let dto: CategoryDto = self.http.post("categories", payload).await?;
        Ok(Category::from(dto))
    }

    /// Create many items in one request
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn bulk_create_items(
        &self,
        items: &[ItemCreateDto],
    ) -> ClientResult<BulkCreateResult> {
        self.http.post("items/bulk", &items).await
    }
}
