//! `pitwall run` - the full boot sequence

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use pitwall_core::PitwallConfig;
use pitwall_server::http::{run_server, AppState, ServerConfig};
use pitwall_server::PgDriverRepo;
use tracing::info;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Exit after the startup task instead of serving HTTP
    #[arg(long)]
    pub no_serve: bool,

    /// Skip the startup task and go straight to serving
    #[arg(long)]
    pub skip_startup: bool,

    /// Address to bind to (default from config: 127.0.0.1:8080)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins)
    #[arg(long)]
    pub cors_permissive: bool,
}

pub async fn run(config: PitwallConfig, args: RunArgs) -> Result<()> {
    let pool = super::connect_and_migrate(&config).await?;
    let repo = Arc::new(PgDriverRepo::new(pool));

    if config.startup.enabled && !args.skip_startup {
        super::seed::startup_task(repo.as_ref()).await?;
    } else {
        info!("Startup task skipped");
    }

    if args.no_serve {
        return Ok(());
    }

    let bind_addr = match args.bind {
        Some(addr) => addr,
        None => config
            .bind_address()
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", config.bind_address()))?,
    };

    let server_config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive || config.server.cors_permissive,
    };

    run_server(AppState::new(repo), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
