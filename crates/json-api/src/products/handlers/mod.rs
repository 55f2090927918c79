//! Product Handlers

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use tally_app::domain::products::data::ProductFields;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

/// Product fields as submitted on create and update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Unit price, as a decimal number or string
    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    pub stock: i32,
}

impl From<ProductRequest> for ProductFields {
    fn from(request: ProductRequest) -> Self {
        ProductFields {
            name: request.name,
            description: request.description,
            price: request.price,
            stock: request.stock,
        }
    }
}
