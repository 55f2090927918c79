//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        audit::{
            AuditLog,
            data::{AuditContext, AuditTable, NewAuditEntry},
            snapshot::Snapshotable,
        },
        mutation::UpdateOutcome,
        products::{
            data::ProductFields,
            errors::ProductsServiceError,
            records::{ProductId, ProductRecord},
            repository::{PgProductsRepository, ProductsRepository},
        },
    },
};

/// Products service that writes an audit entry after every effective mutation.
#[derive(Clone)]
pub struct AuditedProductsService {
    repository: Arc<dyn ProductsRepository>,
    audit: Arc<dyn AuditLog>,
}

impl AuditedProductsService {
    #[must_use]
    pub fn new(db: Db, audit: Arc<dyn AuditLog>) -> Self {
        Self::with_repository(Arc::new(PgProductsRepository::new(db)), audit)
    }

    pub(crate) fn with_repository(
        repository: Arc<dyn ProductsRepository>,
        audit: Arc<dyn AuditLog>,
    ) -> Self {
        Self { repository, audit }
    }
}

#[async_trait]
impl ProductsService for AuditedProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.repository.fetch_products().await?)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .fetch_product(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        ctx: AuditContext,
        product: ProductFields,
    ) -> Result<ProductId, ProductsServiceError> {
        product.validate()?;

        let after = product.snapshot();

        let id = self
            .repository
            .create_product(product)
            .await?
            .ok_or(ProductsServiceError::CreationFailed)?;

        self.audit
            .record(NewAuditEntry::created(
                ctx,
                AuditTable::Products,
                id.into_i64(),
                after,
            ))
            .await;

        Ok(id)
    }

    async fn update_product(
        &self,
        ctx: AuditContext,
        product: ProductId,
        update: ProductFields,
    ) -> Result<UpdateOutcome, ProductsServiceError> {
        update.validate()?;

        let before = self
            .repository
            .fetch_product(product)
            .await?
            .map(|record| record.snapshot());

        let after = update.snapshot();

        let rows_affected = self.repository.update_product(product, update).await?;

        if rows_affected == 0 {
            return Ok(UpdateOutcome::Unchanged);
        }

        self.audit
            .record(NewAuditEntry::updated(
                ctx,
                AuditTable::Products,
                product.into_i64(),
                before,
                after,
            ))
            .await;

        Ok(UpdateOutcome::Updated)
    }

    async fn delete_product(
        &self,
        ctx: AuditContext,
        product: ProductId,
    ) -> Result<(), ProductsServiceError> {
        let before = self
            .repository
            .fetch_product(product)
            .await?
            .map(|record| record.snapshot());

        let rows_affected = self.repository.delete_product(product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        self.audit
            .record(NewAuditEntry::deleted(
                ctx,
                AuditTable::Products,
                product.into_i64(),
                before,
            ))
            .await;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, ordered by id.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a product and returns the id the store assigned.
    async fn create_product(
        &self,
        ctx: AuditContext,
        product: ProductFields,
    ) -> Result<ProductId, ProductsServiceError>;

    /// Overwrites a product's fields. Zero matched rows is reported as
    /// [`UpdateOutcome::Unchanged`], not as an error.
    async fn update_product(
        &self,
        ctx: AuditContext,
        product: ProductId,
        update: ProductFields,
    ) -> Result<UpdateOutcome, ProductsServiceError>;

    /// Deletes a product.
    async fn delete_product(
        &self,
        ctx: AuditContext,
        product: ProductId,
    ) -> Result<(), ProductsServiceError>;
}
