//! Hotel Client - typed REST client for the hotel-management API
//!
//! Every remote call follows the same shape: attach the bearer token,
//! scope the request to the selected hotel, decode the wire DTO and map it
//! into a UI model. [`Resource`] captures that shape once; [`Slice`] holds
//! the `{data, loading, error}` state a caller keeps per resource.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;
pub mod resource;
pub mod slice;

pub use api::HotelApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
pub use resource::{Categories, Items, Outlets, Resource, Tables, TaxConfigs};
pub use slice::Slice;
