//! Schema migrations
//!
//! Scripts live in the workspace `migrations/` directory and are embedded at
//! compile time. sqlx records applied versions in `_sqlx_migrations`, so
//! running the migrator against an up-to-date database is a no-op.

use sqlx::migrate::Migrator;
use sqlx::PgPool;

use super::repos::DbError;

pub static MIGRATOR: Migrator = sqlx::migrate!("../migrations");

/// One known migration and whether the database has applied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub version: i64,
    pub description: String,
    pub applied: bool,
}

/// Apply all pending migrations.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!(latest = latest_version(), "Running migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations up to date");
    Ok(())
}

/// Highest version shipped with this binary (0 when there are none).
pub fn latest_version() -> i64 {
    MIGRATOR
        .iter()
        .filter(|m| m.migration_type.is_up_migration())
        .map(|m| m.version)
        .max()
        .unwrap_or(0)
}

/// List every embedded migration with its applied state, without touching
/// the schema.
pub async fn status(pool: &PgPool) -> Result<Vec<MigrationStatus>, DbError> {
    let table: Option<String> = sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations')::text")
        .fetch_one(pool)
        .await?;

    let applied: Vec<i64> = if table.is_some() {
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success ORDER BY version")
            .fetch_all(pool)
            .await?
    } else {
        Vec::new()
    };

    Ok(merge_status(&applied))
}

fn merge_status(applied: &[i64]) -> Vec<MigrationStatus> {
    MIGRATOR
        .iter()
        .filter(|m| m.migration_type.is_up_migration())
        .map(|m| MigrationStatus {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_both_migrations_in_order() {
        let versions: Vec<i64> = MIGRATOR.iter().map(|m| m.version).collect();
        assert_eq!(versions, vec![1, 2]);
        assert_eq!(latest_version(), 2);
    }

    #[test]
    fn merge_status_marks_applied_versions() {
        let status = merge_status(&[1]);
        assert_eq!(status.len(), 2);
        assert!(status[0].applied);
        assert_eq!(status[0].description, "create drivers");
        assert!(!status[1].applied);
        assert_eq!(status[1].description, "add driver team");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrating_twice_is_a_no_op() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first migration run failed");
        run(&pool).await.expect("second migration run failed");

        let status = status(&pool).await.expect("status failed");
        assert!(status.iter().all(|m| m.applied));
    }
}
