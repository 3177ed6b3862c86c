//! ruletap - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ruletap audit --run run.json` | Record a validation run and print the rules audit |
//! | `ruletap rules [--category C]` | List the rule registry |

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ruletap::commands::{self, AuditOptions};
use ruletap::infrastructure::logging::init_logging;
use ruletap::infrastructure::{AuditRuntime, ConfigLoader};

/// Command line interface for ruletap
#[derive(Parser, Debug)]
#[command(name = "ruletap")]
#[command(version, about = "Rule telemetry and audit reconciliation", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record a validation run and print the rules audit
    Audit {
        /// JSON file with `errors` and `warnings` arrays
        #[arg(long)]
        run: PathBuf,

        /// Product being configured
        #[arg(long)]
        product: Option<String>,

        /// Validation function / module that produced the run
        #[arg(long, default_value = "cli")]
        source: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the rule registry
    Rules {
        /// Only this category (e.g. geometry, belt, speed)
        #[arg(long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;
    loader.log_config_source();
    let runtime = AuditRuntime::from_config(config).context("Failed to build audit runtime")?;

    let output = match cli.command {
        Commands::Audit {
            run,
            product,
            source,
            json,
        } => commands::run_audit(
            &runtime,
            &AuditOptions {
                run,
                product_key: product,
                source_ref: source,
                json,
            },
        )?,
        Commands::Rules { category } => commands::list_rules(&runtime, category.as_deref())?,
    };
    print!("{output}");
    Ok(())
}
