//! Products Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Error, FromRow, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::Db,
    domain::products::{
        data::ProductFields,
        records::{ProductId, ProductRecord},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgProductsRepository {
    db: Db,
}

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn fetch_product(&self, product: ProductId) -> Result<Option<ProductRecord>, Error> {
        let mut conn = self.db.acquire().await?;

        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_optional(&mut *conn)
            .await
    }

    async fn fetch_products(&self) -> Result<Vec<ProductRecord>, Error> {
        let mut conn = self.db.acquire().await?;

        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut *conn)
            .await
    }

    async fn create_product(&self, product: ProductFields) -> Result<Option<ProductId>, Error> {
        let mut conn = self.db.acquire().await?;

        let id = query_scalar::<Postgres, i64>(CREATE_PRODUCT_SQL)
            .bind(product.name)
            .bind(product.description)
            .bind(product.price)
            .bind(product.stock)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(id.map(ProductId::from_i64))
    }

    async fn update_product(&self, product: ProductId, update: ProductFields) -> Result<u64, Error> {
        let mut conn = self.db.acquire().await?;

        let rows_affected = query(UPDATE_PRODUCT_SQL)
            .bind(product.into_i64())
            .bind(update.name)
            .bind(update.description)
            .bind(update.price)
            .bind(update.stock)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn delete_product(&self, product: ProductId) -> Result<u64, Error> {
        let mut conn = self.db.acquire().await?;

        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            stock: row.try_get("stock")?,
        })
    }
}

/// Single-statement product persistence.
#[automock]
#[async_trait]
pub(crate) trait ProductsRepository: Send + Sync {
    async fn fetch_product(&self, product: ProductId) -> Result<Option<ProductRecord>, Error>;

    async fn fetch_products(&self) -> Result<Vec<ProductRecord>, Error>;

    /// Insert a product, returning the id the store assigned.
    async fn create_product(&self, product: ProductFields) -> Result<Option<ProductId>, Error>;

    /// Overwrite a product's fields, returning the number of rows matched.
    async fn update_product(&self, product: ProductId, update: ProductFields) -> Result<u64, Error>;

    /// Delete a product, returning the number of rows removed.
    async fn delete_product(&self, product: ProductId) -> Result<u64, Error>;
}
