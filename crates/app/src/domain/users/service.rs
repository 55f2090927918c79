//! Users service.

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
        users::{
            data::{NewUser, UserUpdate},
            errors::UsersServiceError,
            password::hash_password,
            records::{UserId, UserRecord},
            repository::{PgUsersRepository, UserColumns, UsersRepository},
        },
    },
};

/// Users service that writes an audit entry after every effective mutation.
#[derive(Clone)]
pub struct AuditedUsersService {
    repository: Arc<dyn UsersRepository>,
    audit: Arc<dyn AuditLog>,
}

impl AuditedUsersService {
    #[must_use]
    pub fn new(db: Db, audit: Arc<dyn AuditLog>) -> Self {
        Self::with_repository(Arc::new(PgUsersRepository::new(db)), audit)
    }

    pub(crate) fn with_repository(
        repository: Arc<dyn UsersRepository>,
        audit: Arc<dyn AuditLog>,
    ) -> Self {
        Self { repository, audit }
    }
}

#[async_trait]
impl UsersService for AuditedUsersService {
    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError> {
        Ok(self.repository.fetch_users().await?)
    }

    async fn get_user(&self, user: UserId) -> Result<UserRecord, UsersServiceError> {
        self.repository
            .fetch_user(user)
            .await?
            .ok_or(UsersServiceError::NotFound)
    }

    async fn create_user(
        &self,
        ctx: AuditContext,
        user: NewUser,
    ) -> Result<UserId, UsersServiceError> {
        user.validate()?;

        let after = user.snapshot();

        let password_hash = hash_password(&user.password)?;

        let id = self
            .repository
            .create_user(UserColumns {
                password_hash: Some(password_hash),
                name: user.name,
                email: user.email,
            })
            .await?
            .ok_or(UsersServiceError::CreationFailed)?;

        self.audit
            .record(NewAuditEntry::created(
                ctx,
                AuditTable::Users,
                id.into_i64(),
                after,
            ))
            .await;

        Ok(id)
    }

    async fn update_user(
        &self,
        ctx: AuditContext,
        user: UserId,
        update: UserUpdate,
    ) -> Result<UpdateOutcome, UsersServiceError> {
        update.validate()?;

        let before = self
            .repository
            .fetch_user(user)
            .await?
            .map(|record| record.snapshot());

        let after = update.snapshot();
        let password_hash = update
            .supplied_password()
            .map(hash_password)
            .transpose()?;

        let rows_affected = self
            .repository
            .update_user(
                user,
                UserColumns {
                    name: update.name,
                    email: update.email,
                    password_hash,
                },
            )
            .await?;

        if rows_affected == 0 {
            return Ok(UpdateOutcome::Unchanged);
        }

        self.audit
            .record(NewAuditEntry::updated(
                ctx,
                AuditTable::Users,
                user.into_i64(),
                before,
                after,
            ))
            .await;

        Ok(UpdateOutcome::Updated)
    }

    async fn delete_user(&self, ctx: AuditContext, user: UserId) -> Result<(), UsersServiceError> {
        let before = self
            .repository
            .fetch_user(user)
            .await?
            .map(|record| record.snapshot());

        let rows_affected = self.repository.delete_user(user).await?;

        if rows_affected == 0 {
            return Err(UsersServiceError::NotFound);
        }

        self.audit
            .record(NewAuditEntry::deleted(
                ctx,
                AuditTable::Users,
                user.into_i64(),
                before,
            ))
            .await;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieves all users, ordered by id.
    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserId) -> Result<UserRecord, UsersServiceError>;

    /// Registers a user. The password is stored hashed.
    async fn create_user(
        &self,
        ctx: AuditContext,
        user: NewUser,
    ) -> Result<UserId, UsersServiceError>;

    /// Overwrites a user's name and email, and the password when one is
    /// supplied. Zero matched rows is reported as [`UpdateOutcome::Unchanged`].
    async fn update_user(
        &self,
        ctx: AuditContext,
        user: UserId,
        update: UserUpdate,
    ) -> Result<UpdateOutcome, UsersServiceError>;

    /// Deletes a user.
    async fn delete_user(&self, ctx: AuditContext, user: UserId) -> Result<(), UsersServiceError>;
}
