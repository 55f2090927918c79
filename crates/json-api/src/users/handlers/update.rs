//! Update User Handler

use std::{fmt, sync::Arc};

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use tally_app::domain::users::{data::UserUpdate, records::UserId};

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// Update User Request
///
/// Leave `password` out, or blank, to keep the current one.
#[derive(Deserialize, ToSchema)]
pub(crate) struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "**redacted**"))
            .finish()
    }
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        UserUpdate {
            name: request.name,
            email: request.email,
            password: request.password.map(Zeroizing::new),
        }
    }
}

/// User Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserUpdatedResponse {
    /// `updated`, or `unchanged` when no user had the id
    pub status: String,
}

/// User Update Handler
#[endpoint(
    tags("users"),
    summary = "Update User",
    responses(
        (status_code = StatusCode::OK, description = "User updated or unchanged"),
        (status_code = StatusCode::CONFLICT, description = "Email already registered"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid user fields"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<i64>,
    json: JsonBody<UpdateUserRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = UserId::from_i64(user.into_inner());

    let outcome = state
        .app
        .users
        .update_user(req.audit_context(), user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/users/{user}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    Ok(Json(UserUpdatedResponse {
        status: outcome.as_str().to_string(),
    }))
}
