//! Generation command handlers.

use super::OutputFormat;
use tracing::instrument;
use wanderlust::{Category, Difficulty, WanderlustConfig, WanderlustResult, mistral_generator, render};

/// Generate and print one activity.
#[instrument(skip(config))]
pub async fn generate_activity(
    config: &WanderlustConfig,
    category: Category,
    difficulty: Difficulty,
    format: OutputFormat,
) -> WanderlustResult<()> {
    let generator = mistral_generator(config)?;
    let activity = generator.generate_activity(category, difficulty).await;

    match format {
        OutputFormat::Human => print!("{}", render::activity(&activity)),
        OutputFormat::Json => println!("{}", render::json(&activity)?),
    }
    Ok(())
}

/// Generate and print a quest.
#[instrument(skip(config))]
pub async fn generate_quest(
    config: &WanderlustConfig,
    difficulty: Difficulty,
    steps: u8,
    format: OutputFormat,
) -> WanderlustResult<()> {
    let generator = mistral_generator(config)?;
    let quest = generator.generate_quest(difficulty, steps).await;

    match format {
        OutputFormat::Human => {
            let heading = format!("{steps}-Step Quest ({difficulty}):");
            print!("{}", render::quest(&quest, Some(&heading)));
        }
        OutputFormat::Json => println!("{}", render::json(&quest)?),
    }
    Ok(())
}

/// Generate and print a challenge.
#[instrument(skip(config))]
pub async fn generate_challenge(
    config: &WanderlustConfig,
    activities: u8,
    format: OutputFormat,
) -> WanderlustResult<()> {
    let generator = mistral_generator(config)?;
    let challenge = generator.generate_challenge(activities).await;

    match format {
        OutputFormat::Human => print!("{}", render::challenge(&challenge)),
        OutputFormat::Json => println!("{}", render::json(&challenge)?),
    }
    Ok(())
}
