//! `pitwall seed` - migrate and run the startup task, then exit

use anyhow::{Context, Result};
use pitwall_core::PitwallConfig;
use pitwall_server::{run_startup, DriverRepository, PgDriverRepo};

pub async fn run(config: PitwallConfig) -> Result<()> {
    let pool = super::connect_and_migrate(&config).await?;
    startup_task(&PgDriverRepo::new(pool)).await
}

/// Run the startup task, printing its report to stdout.
pub async fn startup_task(repo: &dyn DriverRepository) -> Result<()> {
    let mut stdout = std::io::stdout();
    run_startup(repo, &mut stdout)
        .await
        .context("Startup task failed")?;
    Ok(())
}
