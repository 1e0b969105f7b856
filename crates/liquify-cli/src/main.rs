mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "liquify")]
#[command(version, about = "Repackage a prerendered app build into a Liquid storefront theme", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full adapter pipeline
    Adapt {
        /// Output directory (overrides liquify.toml)
        #[arg(short, long)]
        out: Option<String>,

        /// Configuration file
        #[arg(short, long, default_value = "liquify.toml")]
        config: PathBuf,
    },

    /// Print the compiled route table
    Routes {
        /// Configuration file
        #[arg(short, long, default_value = "liquify.toml")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Adapt { out, config } => {
            commands::adapt::execute(out.as_deref(), &config)?;
        }
        Commands::Routes { config } => {
            commands::routes::execute(&config)?;
        }
    }

    Ok(())
}
