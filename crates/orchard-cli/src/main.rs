// Rust guideline compliant 2026-10-18

//! Orchard CLI Application
//!
//! Command-line driver for the Orchard fruit lifecycle.

use anyhow::Result;
use clap::Parser;
use orchard_app::{init_tracing, ErrorEnvelope, Orchard};
use orchard_cli::commands;
use orchard_core::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "orchard",
    version,
    about = "Orchard: grow fruits from prompts",
    after_help = "Examples:\n  orchard grow --owner 1 --prompt \"a shiny orange\"\n  orchard grow --owner 1 --prompt \"a shiny orange\" --mesh-id m123\n  orchard rarity \"a long and very detailed prompt\" --samples 5000 --seed 7\n"
)]
struct Cli {
    /// Directory containing orchard.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Submit a fruit and follow it until it is ready
    Grow {
        /// Submitting user ID
        #[arg(long)]
        owner: i64,

        /// Prompt describing the fruit
        #[arg(long)]
        prompt: String,

        /// Mesh ID to assign once the fruit is ready
        #[arg(long)]
        mesh_id: Option<String>,
    },

    /// Sample the rarity draw for a prompt
    Rarity {
        /// Prompt to draw for
        prompt: String,

        /// Number of draws
        #[arg(long, default_value_t = 10_000)]
        samples: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = cli.config.unwrap_or_else(|| PathBuf::from("."));
    let config = Config::load(&config_dir)?;
    let guard = init_tracing(&config.log_level, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Grow {
            owner,
            prompt,
            mesh_id,
        } => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            let orchard = Orchard::from_config(&config);
            let result =
                runtime.block_on(commands::grow::execute(&orchard, owner, prompt, mesh_id));

            match result {
                Ok(report) => println!("{}", serde_json::to_string_pretty(&report)?),
                Err(err) => {
                    let envelope = ErrorEnvelope::from_error(&err);
                    println!("{}", serde_json::to_string_pretty(&envelope)?);
                    drop(guard);
                    std::process::exit(1);
                }
            }
        }
        Commands::Rarity {
            prompt,
            samples,
            seed,
        } => {
            let report = commands::rarity::execute(&prompt, samples, seed)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    drop(guard);
    Ok(())
}
