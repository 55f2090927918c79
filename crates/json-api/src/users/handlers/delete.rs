//! Delete User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use tally_app::domain::users::records::UserId;

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// Delete User Handler
#[endpoint(
    tags("users"),
    summary = "Delete User",
    responses(
        (status_code = StatusCode::OK, description = "User deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .users
        .delete_user(req.audit_context(), UserId::from_i64(user.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
