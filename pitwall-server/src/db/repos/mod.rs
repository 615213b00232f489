//! Repository implementations for database access

pub mod drivers;
#[cfg(test)]
pub(crate) mod memory;

pub use drivers::{DbError, DriverRepository, PgDriverRepo};
