//! `pitwall migrate` - apply or inspect schema migrations

use anyhow::{Context, Result};
use clap::Args;
use pitwall_core::PitwallConfig;
use pitwall_server::db::migrations;

#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// List known migrations and whether each is applied, without migrating
    #[arg(long)]
    pub status: bool,
}

pub async fn run(config: PitwallConfig, args: MigrateArgs) -> Result<()> {
    if args.status {
        let pool = super::connect(&config).await?;
        let status = migrations::status(&pool)
            .await
            .context("Failed to read migration status")?;

        for m in status {
            let state = if m.applied { "applied" } else { "pending" };
            println!("{:>4}  {:<8} {}", m.version, state, m.description);
        }
        return Ok(());
    }

    super::connect_and_migrate(&config).await?;
    println!("Database at version {}", migrations::latest_version());
    Ok(())
}
