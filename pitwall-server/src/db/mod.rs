//! Database layer - connection pool, migrations, named queries and repositories
//!
//! - One pool per process, cloned into whatever needs it
//! - Every SQL statement lives in `queries/` and has exactly one accessor
//! - Rely on DB constraints; no check-then-insert

pub mod migrations;
pub mod pool;
pub mod queries;
pub mod repos;

pub use migrations::MIGRATOR;
pub use pool::{create_pool, create_pool_from_config, create_pool_with_options};
pub use repos::{DbError, DriverRepository, PgDriverRepo};
pub use sqlx::PgPool;
