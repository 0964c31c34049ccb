//! Worldsmith CLI binary.
//!
//! - Generate a world from an idea and export it
//! - Re-export a saved world
//! - List known categories

use clap::Parser;
use std::process::ExitCode;
use worldsmith::{WorldsmithConfig, WorldsmithError, WorldsmithResult, init_logging};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // .env is optional
    let _ = dotenvy::dotenv();

    if let Err(e) = init_logging(cli.verbose, cli.json_logs) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Cli) -> WorldsmithResult<()> {
    use cli::{Commands, GenerateOptions, export_saved_world, list_categories, run_generate};

    let config = WorldsmithConfig::load_with(args.config.as_deref())?;

    match args.command {
        Commands::Generate {
            idea,
            category,
            no_visuals,
            output_dir,
            save_json,
        } => {
            let api_key = std::env::var("GEMINI_API_KEY").ok();
            let options = GenerateOptions {
                idea,
                category,
                include_visuals: !no_visuals,
                output_dir: output_dir.unwrap_or_else(|| config.export().output_dir().clone()),
                save_json,
            };
            run_generate(&config, api_key, options).await
        }

        Commands::Export {
            aggregate,
            output_dir,
        } => {
            let output_dir = output_dir.unwrap_or_else(|| config.export().output_dir().clone());
            export_saved_world(&aggregate, &output_dir)
        }

        Commands::Categories => {
            list_categories();
            Ok(())
        }
    }
}

fn failure_message(error: &WorldsmithError) -> String {
    match error.generation_kind() {
        Some(kind) if kind.is_transport() => format!(
            "World generation failed: {kind}\nCheck your network connection and try again."
        ),
        Some(kind) => format!(
            "World generation failed: {kind}\nCheck GEMINI_API_KEY and the service status, then try again."
        ),
        None => format!("Error: {error}"),
    }
}
