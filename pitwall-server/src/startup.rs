//! Startup task: reset the drivers table, insert the fixed grid, report.
//!
//! Output is written line by line to the given writer (stdout in the CLI):
//!
//! ```text
//! Inserted driver: Lando Norris (#4)
//! Inserted driver: Oscar Piastri (#81)
//! Inserted driver: Max Verstappen (#1)
//! Driver count: 3
//! Driver #81: Oscar Piastri
//! ```

use std::io::{self, Write};

use pitwall_core::Driver;
use tracing::{debug, info};

use crate::db::{DbError, DriverRepository};

/// Driver looked up by key at the end of the task
pub const LOOKUP_ID: i64 = 81;

/// The rows inserted on every startup, in insertion order.
pub fn startup_drivers() -> Vec<Driver> {
    vec![
        Driver::new(4, "Lando Norris", Some("McLaren")),
        Driver::new(81, "Oscar Piastri", Some("McLaren")),
        Driver::new(1, "Max Verstappen", Some("Red Bull Racing")),
    ]
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Database(#[from] DbError),

    #[error("failed to write startup report: {0}")]
    Io(#[from] io::Error),
}

/// What the startup task did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupReport {
    pub deleted: u64,
    pub inserted: usize,
    pub count: usize,
    pub lookup: Option<Driver>,
}

/// Run the startup task against `repo`, writing the five report lines to `out`.
///
/// Each call is sequential: delete-all, three inserts, count, lookup. Any
/// failure aborts the task and is returned unchanged.
pub async fn run_startup<W>(
    repo: &dyn DriverRepository,
    out: &mut W,
) -> Result<StartupReport, StartupError>
where
    W: Write,
{
    let deleted = repo.delete_all().await?;
    debug!(deleted, "cleared drivers table");

    let drivers = startup_drivers();
    for driver in &drivers {
        repo.insert(driver).await?;
        writeln!(out, "Inserted driver: {} (#{})", driver.name, driver.id)?;
    }

    let count = repo.count().await?;
    writeln!(out, "Driver count: {}", count)?;

    let lookup = repo.get(LOOKUP_ID).await?;
    match &lookup {
        Some(driver) => writeln!(out, "Driver #{}: {}", LOOKUP_ID, driver.name)?,
        None => writeln!(out, "Driver #{}: not found", LOOKUP_ID)?,
    }
    out.flush()?;

    info!(inserted = drivers.len(), count, "startup task complete");

    Ok(StartupReport {
        deleted,
        inserted: drivers.len(),
        count,
        lookup,
    })
}
