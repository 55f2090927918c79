//! Users service errors.

use argon2::password_hash;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("invalid user: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("email already registered")]
    AlreadyExists,

    #[error("user not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("user was not created")]
    CreationFailed,

    #[error("failed to hash password")]
    PasswordHashing(#[from] password_hash::Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_names_the_email() {
        assert_eq!(
            UsersServiceError::AlreadyExists.to_string(),
            "email already registered"
        );
    }

    #[test]
    fn connection_errors_map_to_sql() {
        assert!(matches!(
            UsersServiceError::from(Error::PoolClosed),
            UsersServiceError::Sql(_)
        ));
    }
}
