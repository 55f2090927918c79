//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use tally_app::{
    context::AppContext,
    domain::{
        audit::MockAuditLog,
        products::{
            MockProductsService,
            records::{ProductId, ProductRecord},
        },
        users::{
            MockUsersService,
            records::{UserId, UserRecord},
        },
    },
};

use crate::state::State;

pub(crate) fn make_product(id: ProductId) -> ProductRecord {
    ProductRecord {
        id,
        name: "Desk".to_string(),
        description: Some("Oak standing desk".to_string()),
        price: Decimal::new(1250, 2),
        stock: 4,
    }
}

pub(crate) fn make_user(id: UserId) -> UserRecord {
    UserRecord {
        id,
        name: "Ana Silva".to_string(),
        email: "ana@example.com".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_list_users().never();
    users.expect_get_user().never();
    users.expect_create_user().never();
    users.expect_update_user().never();
    users.expect_delete_user().never();

    users
}

fn strict_audit_mock() -> MockAuditLog {
    let mut audit = MockAuditLog::new();

    audit.expect_record().never();
    audit.expect_list_entries().never();

    audit
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with(
        AppContext {
            products: Arc::new(products),
            users: Arc::new(strict_users_mock()),
            audit: Arc::new(strict_audit_mock()),
        },
        route,
    )
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    service_with(
        AppContext {
            products: Arc::new(strict_products_mock()),
            users: Arc::new(users),
            audit: Arc::new(strict_audit_mock()),
        },
        route,
    )
}

pub(crate) fn audit_service(audit: MockAuditLog, route: Router) -> Service {
    service_with(
        AppContext {
            products: Arc::new(strict_products_mock()),
            users: Arc::new(strict_users_mock()),
            audit: Arc::new(audit),
        },
        route,
    )
}
