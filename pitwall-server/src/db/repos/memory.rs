//! In-memory driver repository for tests that run without Postgres.

use std::collections::BTreeMap;

use async_trait::async_trait;
use pitwall_core::Driver;
use tokio::sync::RwLock;

use super::drivers::{DbError, DriverRepository};

#[derive(Default)]
pub(crate) struct MemoryDriverRepo {
    rows: RwLock<BTreeMap<i64, Driver>>,
}

impl MemoryDriverRepo {
    pub(crate) fn with_drivers(drivers: impl IntoIterator<Item = Driver>) -> Self {
        Self {
            rows: RwLock::new(drivers.into_iter().map(|d| (d.id, d)).collect()),
        }
    }
}

#[async_trait]
impl DriverRepository for MemoryDriverRepo {
    async fn list(&self) -> Result<Vec<Driver>, DbError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Driver>, DbError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert(&self, driver: &Driver) -> Result<u64, DbError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&driver.id) {
            return Err(DbError::Conflict {
                resource: "driver",
                id: driver.id.to_string(),
            });
        }
        rows.insert(driver.id, driver.clone());
        Ok(1)
    }

    async fn delete_all(&self) -> Result<u64, DbError> {
        let mut rows = self.rows.write().await;
        let removed = rows.len() as u64;
        rows.clear();
        Ok(removed)
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
