//! Product Records

use rust_decimal::Decimal;

use crate::{
    domain::{
        audit::snapshot::{Snapshot, Snapshotable},
        products::data::product_snapshot,
    },
    ids::TypedId,
};

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

impl Snapshotable for ProductRecord {
    fn snapshot(&self) -> Snapshot {
        product_snapshot(&self.name, self.description.as_deref(), self.price, self.stock)
    }
}
