//! Driver repository
//!
//! Thin async seam over the named accessors in [`crate::db::queries`]:
//! no transactions, no batching, no retries.

use async_trait::async_trait;
use pitwall_core::Driver;
use sqlx::PgPool;

use crate::db::queries;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("conflict: {resource} '{id}' already exists")]
    Conflict { resource: &'static str, id: String },
}

/// Access to the `drivers` table.
#[async_trait]
pub trait DriverRepository: Send + Sync + 'static {
    /// All drivers, ordered by id.
    async fn list(&self) -> Result<Vec<Driver>, DbError>;

    /// One driver by id; a missing id is `Ok(None)`.
    async fn get(&self, id: i64) -> Result<Option<Driver>, DbError>;

    /// Insert one driver. A duplicate id is [`DbError::Conflict`].
    async fn insert(&self, driver: &Driver) -> Result<u64, DbError>;

    /// Delete every row, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, DbError>;

    /// Row count, derived from `list`.
    async fn count(&self) -> Result<usize, DbError> {
        Ok(self.list().await?.len())
    }

    /// Check that the backing store is reachable, without running a query.
    async fn ping(&self) -> Result<(), DbError>;
}

/// Postgres-backed driver repository
#[derive(Clone)]
pub struct PgDriverRepo {
    pool: PgPool,
}

impl PgDriverRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverRepository for PgDriverRepo {
    async fn list(&self) -> Result<Vec<Driver>, DbError> {
        Ok(queries::list_drivers(&self.pool).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<Driver>, DbError> {
        Ok(queries::get_driver(&self.pool, id).await?)
    }

    async fn insert(&self, driver: &Driver) -> Result<u64, DbError> {
        queries::insert_driver(&self.pool, driver.id, &driver.name, driver.team.as_deref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DbError::Conflict {
                        resource: "driver",
                        id: driver.id.to_string(),
                    }
                } else {
                    DbError::Sqlx(e)
                }
            })
    }

    async fn delete_all(&self) -> Result<u64, DbError> {
        Ok(queries::delete_all_drivers(&self.pool).await?)
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.pool.acquire().await?;
        Ok(())
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}
