//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use tally_app::{database::store_code, domain::products::ProductsServiceError};

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::Validation(errors) => StatusError::unprocessable_entity()
            .brief("Invalid product")
            .detail(errors.to_string()),
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::CreationFailed => {
            error!("store did not return an id for the new product");

            StatusError::internal_server_error()
        }
        ProductsServiceError::Sql(source) => {
            error!(code = ?store_code(&source), "product storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use tally_app::domain::validation::{FieldError, ValidationErrors};

    use super::*;

    #[test]
    fn validation_failures_list_each_field() {
        let errors: ValidationErrors = [
            FieldError::TooShort {
                field: "name",
                min: 3,
            },
            FieldError::NotPositive { field: "price" },
        ]
        .into_iter()
        .collect();

        let status = into_status_error(ProductsServiceError::Validation(errors));

        assert_eq!(status.code, StatusCode::UNPROCESSABLE_ENTITY, "expected 422");
        assert_eq!(
            status.detail.as_deref(),
            Some("name must be at least 3 characters; price must be greater than zero"),
            "expected every field message"
        );
    }

    #[test]
    fn store_errors_map_to_client_and_server_statuses() {
        let cases = [
            (ProductsServiceError::AlreadyExists, StatusCode::CONFLICT),
            (ProductsServiceError::NotFound, StatusCode::NOT_FOUND),
            (ProductsServiceError::InvalidData, StatusCode::BAD_REQUEST),
            (
                ProductsServiceError::MissingRequiredData,
                StatusCode::BAD_REQUEST,
            ),
            (
                ProductsServiceError::CreationFailed,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ProductsServiceError::Sql(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let message = error.to_string();

            assert_eq!(into_status_error(error).code, expected, "{message}");
        }
    }
}
