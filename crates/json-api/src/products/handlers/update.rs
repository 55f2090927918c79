//! Update Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tally_app::domain::products::records::ProductId;

use crate::{
    extensions::*,
    products::{ProductRequest, errors::into_status_error},
    state::State,
};

/// Product Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductUpdatedResponse {
    /// `updated`, or `unchanged` when no product had the id
    pub status: String,
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated or unchanged"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid product fields"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, req, depot, res),
    fields(product_id = tracing::field::Empty, price = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<i64>,
    json: JsonBody<ProductRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let product = ProductId::from_i64(product.into_inner());

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));
    span.record("price", tracing::field::display(request.price));

    let outcome = state
        .app
        .products
        .update_product(req.audit_context(), product, request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{product}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    tracing::info!(product_id = %product, outcome = outcome.as_str(), "updated product");

    Ok(Json(ProductUpdatedResponse {
        status: outcome.as_str().to_string(),
    }))
}
