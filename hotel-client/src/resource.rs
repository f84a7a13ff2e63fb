//! Hotel-scoped list resources
//!
//! One [`Resource`] impl per master-data endpoint. The fetch path, query
//! scoping and wire→model mapping are shared by [`crate::HotelApi::fetch`];
//! an impl only names its path and its two types.

use serde::de::DeserializeOwned;
use shared::dto::{CategoryDto, ItemMasterDto, PosCenterDto, TableDto, TaxConfigDto};
use shared::models::{Category, DiningTable, Outlet, Product, TaxConfig};

/// A list endpoint of the hotel API
pub trait Resource: Send + Sync {
    /// Wire DTO of one row
    type Wire: DeserializeOwned + Send + 'static;
    /// UI model one row normalizes into
    type Model: From<Self::Wire> + Send + 'static;

    /// Human-readable name for logs
    const NAME: &'static str;
    /// Path relative to the API base
    const PATH: &'static str;

    /// Query pairs beyond `hotelId`
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Map one wire row into its model
    fn normalize(wire: Self::Wire) -> Self::Model {
        Self::Model::from(wire)
    }
}

macro_rules! hotel_resource {
    ($(#[$meta:meta])* $name:ident, $path:literal, $wire:ty => $model:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Resource for $name {
            type Wire = $wire;
            type Model = $model;
            const NAME: &'static str = stringify!($name);
            const PATH: &'static str = $path;
        }
    };
}

hotel_resource!(
    /// Item master list
    Items, "items", ItemMasterDto => Product
);
hotel_resource!(
    /// Category master list
    Categories, "categories", CategoryDto => Category
);
hotel_resource!(
    /// POS center (outlet) list
    Outlets, "pos-centers", PosCenterDto => Outlet
);
hotel_resource!(
    /// Outlet tax configurations
    TaxConfigs, "tax-configs", TaxConfigDto => TaxConfig
);

/// Dining tables of one outlet
#[derive(Debug, Clone, Copy)]
pub struct Tables {
    pub outlet_id: i64,
}

impl Resource for Tables {
    type Wire = TableDto;
    type Model = DiningTable;
    const NAME: &'static str = "Tables";
    const PATH: &'static str = "tables";

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("posCenterId", self.outlet_id.to_string())]
    }
}

/// Build `path?hotelId=..&k=v` for a resource
pub(crate) fn scoped_path<R: Resource>(resource: &R, hotel_id: i64) -> String {
    let mut pairs = vec![format!("hotelId={}", hotel_id)];
    pairs.extend(
        resource
            .query()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v)),
    );
    format!("{}?{}", R::PATH, pairs.join("&"))
}
