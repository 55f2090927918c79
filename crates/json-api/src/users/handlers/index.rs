//! User Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, get::UserResponse},
};

/// User Index Handler
///
/// Returns every user, ordered by id.
#[endpoint(tags("users"), summary = "List Users")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<UserResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let users = state
        .app
        .users
        .list_users()
        .await
        .map_err(into_status_error)?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
