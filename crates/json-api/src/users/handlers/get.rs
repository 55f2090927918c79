//! Get User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tally_app::domain::users::records::{UserId, UserRecord};

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// A registered user. The password is never returned.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// The store-assigned user id
    pub id: i64,

    pub name: String,

    pub email: String,

    /// The date and time the user was registered
    pub created_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        UserResponse {
            id: user.id.into_i64(),
            name: user.name,
            email: user.email,
            created_at: user.created_at.to_string(),
        }
    }
}

/// Get User Handler
#[endpoint(
    tags("users"),
    summary = "Get User",
    responses(
        (status_code = StatusCode::OK, description = "User found"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .get_user(UserId::from_i64(user.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tally_app::domain::users::{MockUsersService, UsersServiceError};

    use crate::test_helpers::{make_user, users_service};

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        users_service(users, Router::with_path("users/{user}").get(handler))
    }

    #[tokio::test]
    async fn test_get_user_returns_200_without_password() -> TestResult {
        let mut users = MockUsersService::new();
        let id = UserId::from_i64(7);

        users
            .expect_get_user()
            .once()
            .withf(move |u| *u == id)
            .return_once(move |_| Ok(make_user(id)));

        let mut res = TestClient::get("http://example.com/users/7")
            .send(&make_service(users))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK), "expected 200");
        assert_eq!(body.get("email"), Some(&serde_json::json!("ana@example.com")), "email");
        assert_eq!(body.get("password"), None, "password never returned");
        assert_eq!(
            body.get("created_at"),
            Some(&serde_json::json!("1970-01-01T00:00:00Z")),
            "created_at as RFC 3339"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_user_returns_404() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .return_once(|_| Err(UsersServiceError::NotFound));

        let res = TestClient::get("http://example.com/users/70")
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND), "expected 404");

        Ok(())
    }
}
