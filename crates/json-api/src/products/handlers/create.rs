//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    products::{ProductRequest, errors::into_status_error},
    state::State,
};

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    /// Created product id
    pub id: i64,
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid product fields"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id = state
        .app
        .products
        .create_product(req.audit_context(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse { id: id.into_i64() }))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tally_app::domain::{
        products::{
            MockProductsService, ProductsServiceError, data::ProductFields, records::ProductId,
        },
        validation::{FieldError, ValidationErrors},
    };

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    fn desk() -> ProductFields {
        ProductFields {
            name: "Desk".to_string(),
            description: None,
            price: Decimal::new(125, 1),
            stock: 4,
        }
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|ctx, fields| ctx.acting_user.is_none() && *fields == desk())
            .return_once(|_, _| Ok(ProductId::from_i64(3)));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Desk", "price": 12.5, "stock": 4 }))
            .send(&make_service(products))
            .await;

        let body: ProductCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED), "expected 201");
        assert_eq!(location, Some("/products/3"), "location header");
        assert_eq!(body.id, 3, "created id");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_accepts_string_price() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|_, fields| *fields == desk())
            .return_once(|_, _| Ok(ProductId::from_i64(4)));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Desk", "price": "12.50", "stock": 4 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED), "expected 201");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_invalid_product_returns_422() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().once().return_once(|_, _| {
            Err(ProductsServiceError::Validation(ValidationErrors::from(
                FieldError::NotPositive { field: "price" },
            )))
        });

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Desk", "price": 0, "stock": 4 }))
            .send(&make_service(products))
            .await;

        assert_eq!(
            res.status_code,
            Some(StatusCode::UNPROCESSABLE_ENTITY),
            "expected 422"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_conflict_returns_409() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Desk", "price": 12.5, "stock": 4 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT), "expected 409");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_malformed_body_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Desk" }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "expected 400");

        Ok(())
    }
}
