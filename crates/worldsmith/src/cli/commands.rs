//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Worldsmith - turn a one-line idea into an illustrated world document
#[derive(Parser, Debug)]
#[command(name = "worldsmith")]
#[command(about = "Turn a one-line idea into an illustrated world document", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file, applied last
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a world and export it
    Generate {
        /// The idea to build the world around
        #[arg(long)]
        idea: String,

        /// World category, e.g. Fantasy or Post-Apocalyptic
        #[arg(long)]
        category: String,

        /// Skip image generation
        #[arg(long)]
        no_visuals: bool,

        /// Directory for the exported file (overrides configuration)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Also save the generated world as JSON
        #[arg(long)]
        save_json: Option<PathBuf>,
    },

    /// Export a world saved with --save-json
    Export {
        /// Path to the saved world JSON
        aggregate: PathBuf,

        /// Directory for the exported file (overrides configuration)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// List known categories and their moods
    Categories,
}
