//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wanderlust::{
    CHALLENGE_ACTIVITIES, Category, DEFAULT_CHALLENGE_ACTIVITIES, DEFAULT_QUEST_STEPS, Difficulty,
    QUEST_STEPS, RecordKind,
};

/// Wanderlust - model-generated local activities, quests and challenges
#[derive(Parser, Debug)]
#[command(name = "wanderlust")]
#[command(about = "Model-generated local activities, quests and challenges", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a single activity
    Activity {
        /// Activity category
        #[arg(short, long, default_value = "food")]
        category: Category,

        /// Requested difficulty
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Generate a multi-step quest
    Quest {
        /// Requested difficulty
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,

        /// Number of steps
        #[arg(short, long, default_value_t = DEFAULT_QUEST_STEPS,
              value_parser = clap::value_parser!(u8).range(*QUEST_STEPS.start() as i64..=*QUEST_STEPS.end() as i64))]
        steps: u8,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Generate a set of challenge activities
    Challenge {
        /// Number of activities
        #[arg(short, long, default_value_t = DEFAULT_CHALLENGE_ACTIVITIES,
              value_parser = clap::value_parser!(u8).range(*CHALLENGE_ACTIVITIES.start() as i64..=*CHALLENGE_ACTIVITIES.end() as i64))]
        activities: u8,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Parse a saved model answer without calling the model
    Parse {
        /// Record shape of the text
        kind: RecordKind,

        /// File to read; standard input when omitted
        file: Option<PathBuf>,

        /// Category stamped onto a parsed activity
        #[arg(short, long, default_value = "food")]
        category: Category,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Explore interactively, collecting points and achievements
    Explore,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
