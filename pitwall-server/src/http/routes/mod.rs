//! Route handlers organized by resource

pub mod drivers;
pub mod health;
