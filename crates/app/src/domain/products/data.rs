//! Products Data

use rust_decimal::Decimal;

use crate::domain::{
    audit::snapshot::{Snapshot, Snapshotable},
    validation::{FieldError, ValidationErrors},
};

/// Minimum product name length, in characters.
pub const NAME_MIN_LENGTH: usize = 3;

/// Decimal places the price column keeps.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Prices must stay below this; the column holds 10 integer digits.
#[must_use]
pub fn price_limit() -> Decimal {
    Decimal::new(10_000_000_000, 0)
}

/// Product fields submitted on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

impl ProductFields {
    /// Check the field constraints, reporting every failing field.
    ///
    /// # Errors
    ///
    /// Returns the violated constraints.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        errors.check_length("name", &self.name, NAME_MIN_LENGTH, None);

        if self.price <= Decimal::ZERO {
            errors.push(FieldError::NotPositive { field: "price" });
        } else if self.price.normalize().scale() > PRICE_DECIMAL_PLACES {
            errors.push(FieldError::TooManyDecimalPlaces {
                field: "price",
                max: PRICE_DECIMAL_PLACES,
            });
        } else if self.price >= price_limit() {
            errors.push(FieldError::TooLarge {
                field: "price",
                limit: price_limit(),
            });
        }

        if self.stock < 0 {
            errors.push(FieldError::Negative { field: "stock" });
        }

        errors.into_result()
    }
}

impl Snapshotable for ProductFields {
    fn snapshot(&self) -> Snapshot {
        product_snapshot(&self.name, self.description.as_deref(), self.price, self.stock)
    }
}

pub(crate) fn product_snapshot(
    name: &str,
    description: Option<&str>,
    price: Decimal,
    stock: i32,
) -> Snapshot {
    Snapshot::new()
        .text("name", name)
        .with("description", description.map(str::to_string).into())
        .decimal("price", price)
        .integer("stock", stock)
}
