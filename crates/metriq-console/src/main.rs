//! metriq console binary.
//!
//! - Config: `metriq.yaml` (strict parsing + validate), defaults when absent
//! - Commands: list / add / show / set / delete against the metrics service
//! - Tracing via `RUST_LOG` env filter

mod commands;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use commands::Commands;
use metriq_console::config;

#[derive(Debug, Parser)]
#[command(name = "metriq")]
#[command(about = "Console client for the metrics service", long_about = None)]
struct Cli {
    /// Config file path.
    #[arg(long, default_value = "metriq.yaml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    let cfg = config::load_or_default(&cli.config).expect("config load failed");

    if let Err(e) = commands::handle_command(cli.command, &cfg).await {
        tracing::error!(class = e.class().as_str(), error = %e, "command failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
