//! pitwall CLI - driver roster service
//!
//! Boots the service: resolves configuration, applies schema migrations,
//! runs the startup task (reset + insert + report) and then serves HTTP
//! until shut down. Subcommands expose each step on its own.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

mod commands;
mod tracing_setup;

use commands::{migrate::MigrateArgs, run::RunArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "pitwall",
    author,
    version,
    about = "Driver roster service backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Database URL (overrides config files)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Migrate, run the startup task, then serve HTTP (default)
    Run(RunArgs),
    /// Apply pending schema migrations and exit
    Migrate(MigrateArgs),
    /// Migrate and run the startup task only
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so .env values can feed clap's `env` fallbacks
    let env_files = pitwall_core::config::load_dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    for path in &env_files {
        debug!("Loaded environment from {}", path.display());
    }

    let config = commands::resolve_config(cli.database_url);

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => commands::run::run(config, args).await,
        Commands::Migrate(args) => commands::migrate::run(config, args).await,
        Commands::Seed => commands::seed::run(config).await,
    }
}
