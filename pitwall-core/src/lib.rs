//! pitwall-core: domain model, configuration and error types shared by the
//! server and CLI crates.

pub mod config;
pub mod error;
pub mod model;

pub use config::PitwallConfig;
pub use error::{PitwallError, Result};
pub use model::Driver;
