//! Wanderlust CLI binary.
//!
//! This binary provides command-line access to Wanderlust:
//! - Generate an activity, quest or challenge
//! - Parse saved model answers offline
//! - Explore interactively with points and achievements

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wanderlust::WanderlustConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, explore, generate_activity, generate_challenge, generate_quest, parse_file};

    // API keys may live in .env
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => WanderlustConfig::from_file(path)?,
        None => WanderlustConfig::load()?,
    };

    // Execute the requested command
    match cli.command {
        Commands::Activity {
            category,
            difficulty,
            format,
        } => {
            generate_activity(&config, category, difficulty, format).await?;
        }

        Commands::Quest {
            difficulty,
            steps,
            format,
        } => {
            generate_quest(&config, difficulty, steps, format).await?;
        }

        Commands::Challenge { activities, format } => {
            generate_challenge(&config, activities, format).await?;
        }

        Commands::Parse {
            kind,
            file,
            category,
            format,
        } => {
            parse_file(kind, file.as_deref(), category, format)?;
        }

        Commands::Explore => {
            explore(&config).await?;
        }
    }

    Ok(())
}
