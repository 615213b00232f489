//! Named SQL statements and their typed accessors.
//!
//! Each `queries/<name>.sql` file is compiled into the binary and has one
//! accessor here with typed parameters and a typed result. Accessors take any
//! Postgres executor, so they work against a pool, a pooled connection or a
//! transaction alike.

use pitwall_core::Driver;
use sqlx::{FromRow, PgExecutor};

pub const LIST_DRIVERS: &str = include_str!("../../queries/list_drivers.sql");
pub const GET_DRIVER: &str = include_str!("../../queries/get_driver.sql");
pub const INSERT_DRIVER: &str = include_str!("../../queries/insert_driver.sql");
pub const DELETE_ALL_DRIVERS: &str = include_str!("../../queries/delete_all_drivers.sql");

/// Row shape returned by the driver SELECTs
#[derive(Debug, Clone, FromRow)]
pub struct DriverRow {
    pub id: i64,
    pub name: String,
    pub team: Option<String>,
}

impl From<DriverRow> for Driver {
    fn from(row: DriverRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            team: row.team,
        }
    }
}

/// `list_drivers`: every driver, ordered by id.
pub async fn list_drivers<'e, E>(executor: E) -> Result<Vec<Driver>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let rows: Vec<DriverRow> = sqlx::query_as(LIST_DRIVERS).fetch_all(executor).await?;
    Ok(rows.into_iter().map(Driver::from).collect())
}

/// `get_driver`: one driver by primary key, `None` when absent.
pub async fn get_driver<'e, E>(executor: E, id: i64) -> Result<Option<Driver>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let row: Option<DriverRow> = sqlx::query_as(GET_DRIVER)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.map(Driver::from))
}

/// `insert_driver`: returns rows affected.
pub async fn insert_driver<'e, E>(
    executor: E,
    id: i64,
    name: &str,
    team: Option<&str>,
) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(INSERT_DRIVER)
        .bind(id)
        .bind(name)
        .bind(team)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// `delete_all_drivers`: returns rows affected.
pub async fn delete_all_drivers<'e, E>(executor: E) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(DELETE_ALL_DRIVERS).execute(executor).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_are_named_after_their_files() {
        for (name, sql) in [
            ("list_drivers", LIST_DRIVERS),
            ("get_driver", GET_DRIVER),
            ("insert_driver", INSERT_DRIVER),
            ("delete_all_drivers", DELETE_ALL_DRIVERS),
        ] {
            assert!(
                sql.starts_with(&format!("-- name: {name}")),
                "{name} has wrong header"
            );
        }
    }

    #[test]
    fn insert_uses_three_positional_parameters() {
        assert!(INSERT_DRIVER.contains("$1"));
        assert!(INSERT_DRIVER.contains("$2"));
        assert!(INSERT_DRIVER.contains("$3"));
        assert!(!INSERT_DRIVER.contains("$4"));
    }

    #[test]
    fn row_converts_to_driver() {
        let row = DriverRow {
            id: 81,
            name: "Oscar Piastri".into(),
            team: Some("McLaren".into()),
        };
        assert_eq!(Driver::from(row), Driver::new(81, "Oscar Piastri", Some("McLaren")));
    }
}
