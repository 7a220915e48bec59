//! CLI Adapter.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "faasd")]
#[command(version)]
#[command(about = "Install faasd and faasd-provider as systemd services", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install faasd
    Install,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging();

    let result: Result<(), AppError> = match cli.command {
        Commands::Install => run_install(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_install() -> Result<(), AppError> {
    let outcome = crate::app::api::install()?;
    println!("{}", outcome.guidance);
    Ok(())
}

/// Logs go to stderr; stdout is reserved for operator guidance.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
