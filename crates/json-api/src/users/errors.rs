//! User Errors

use salvo::http::StatusError;
use tracing::error;

use tally_app::{database::store_code, domain::users::UsersServiceError};

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::Validation(errors) => StatusError::unprocessable_entity()
            .brief("Invalid user")
            .detail(errors.to_string()),
        UsersServiceError::AlreadyExists => StatusError::conflict().brief("email already registered"),
        UsersServiceError::NotFound => StatusError::not_found().brief("User not found"),
        UsersServiceError::MissingRequiredData | UsersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid user payload")
        }
        UsersServiceError::PasswordHashing(source) => {
            error!("failed to hash user password: {source}");

            StatusError::internal_server_error()
        }
        UsersServiceError::CreationFailed => {
            error!("store did not return an id for the new user");

            StatusError::internal_server_error()
        }
        UsersServiceError::Sql(source) => {
            error!(code = ?store_code(&source), "user storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
