//! Create User Handler

use std::{fmt, sync::Arc};

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use tally_app::domain::users::data::NewUser;

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// Create User Request
#[derive(Deserialize, ToSchema)]
pub(crate) struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
            password: Zeroizing::new(request.password),
        }
    }
}

/// User Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserCreatedResponse {
    /// Created user id
    pub id: i64,
}

/// Create User Handler
#[endpoint(
    tags("users"),
    summary = "Create User",
    responses(
        (status_code = StatusCode::CREATED, description = "User created"),
        (status_code = StatusCode::CONFLICT, description = "Email already registered"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid user fields"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateUserRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id = state
        .app
        .users
        .create_user(req.audit_context(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/users/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(UserCreatedResponse { id: id.into_i64() }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tally_app::domain::users::{MockUsersService, UsersServiceError, records::UserId};

    use crate::test_helpers::users_service;

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        users_service(users, Router::with_path("users").post(handler))
    }

    fn ana() -> serde_json::Value {
        json!({ "name": "Ana Silva", "email": "ana@example.com", "password": "s3cret!" })
    }

    #[tokio::test]
    async fn test_create_user_success() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .once()
            .withf(|_, user| {
                user.name == "Ana Silva"
                    && user.email == "ana@example.com"
                    && user.password.as_str() == "s3cret!"
            })
            .return_once(|_, _| Ok(UserId::from_i64(7)));

        let mut res = TestClient::post("http://example.com/users")
            .json(&ana())
            .send(&make_service(users))
            .await;

        let body: UserCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED), "expected 201");
        assert_eq!(location, Some("/users/7"), "location header");
        assert_eq!(body.id, 7, "created id");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_email_returns_409() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .once()
            .return_once(|_, _| Err(UsersServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/users")
            .json(&ana())
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT), "expected 409");

        Ok(())
    }

    #[test]
    fn request_debug_hides_password() {
        let request = CreateUserRequest {
            name: "Ana Silva".to_string(),
            email: "ana@example.com".to_string(),
            password: "s3cret!".to_string(),
        };

        assert!(
            !format!("{request:?}").contains("s3cret!"),
            "password must not be printed"
        );
    }
}
