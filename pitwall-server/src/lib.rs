//! pitwall-server: database layer, startup task and HTTP service
//!
//! The flow at process start is `db::create_pool` -> `db::migrations::run`
//! -> `startup::run_startup` -> `http::run_server`.

pub mod db;
pub mod http;
pub mod startup;

pub use db::{DbError, DriverRepository, PgDriverRepo};
pub use startup::{run_startup, StartupError, StartupReport};
