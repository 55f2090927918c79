//! App Router

use salvo::Router;

use crate::{audit, products, users};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .post(users::create::handler)
                .push(
                    Router::with_path("{user}")
                        .get(users::get::handler)
                        .put(users::update::handler)
                        .delete(users::delete::handler),
                ),
        )
        .push(Router::with_path("audit-log").get(audit::index::handler))
}
