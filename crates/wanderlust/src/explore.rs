//! Interactive session: one command per line.

use crate::render;
use clap::{Parser, Subcommand};
use derive_getters::Getters;
use tracing::{debug, instrument};
use wanderlust_core::{Activity, Category, Difficulty};
use wanderlust_error::{SessionError, SessionErrorKind, WanderlustErrorKind};
use wanderlust_generation::{DEFAULT_CHALLENGE_ACTIVITIES, DEFAULT_QUEST_STEPS, Generator};
use wanderlust_interface::WanderlustDriver;
use wanderlust_session::Session;

/// One line typed at the explorer prompt.
#[derive(Parser, Debug)]
#[command(name = "wanderlust>", no_binary_name = true, disable_version_flag = true)]
pub struct ExploreLine {
    /// Command to execute
    #[command(subcommand)]
    pub command: ExploreCommand,
}

/// Explorer commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ExploreCommand {
    /// Generate an activity
    Wander {
        /// Activity category
        #[arg(short, long, default_value = "food")]
        category: Category,

        /// Requested difficulty
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,
    },

    /// Complete the current activity and collect points
    Complete,

    /// Save the current activity for later
    Save,

    /// Generate a multi-step quest
    Quest {
        /// Requested difficulty
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,

        /// Number of steps
        #[arg(short, long, default_value_t = DEFAULT_QUEST_STEPS, value_parser = clap::value_parser!(u8).range(3..=5))]
        steps: u8,
    },

    /// Generate a set of challenge activities
    Challenge {
        /// Number of activities
        #[arg(short, long, default_value_t = DEFAULT_CHALLENGE_ACTIVITIES, value_parser = clap::value_parser!(u8).range(2..=5))]
        activities: u8,
    },

    /// Show points, achievements and history
    Profile,

    /// Change the display name
    Rename {
        /// New name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Leave the explorer
    #[command(visible_alias = "exit")]
    Quit,
}

/// What the caller should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next line
    Continue(String),
    /// Stop reading
    Quit,
}

/// State of an interactive session: the generator, the user's session and
/// the activity currently on screen.
#[derive(Debug, Getters)]
pub struct Explorer<D> {
    /// Source of activities
    generator: Generator<D>,
    /// Points and history
    session: Session,
    /// Last generated activity, if not yet completed
    current: Option<Activity>,
}

impl<D: WanderlustDriver> Explorer<D> {
    /// Starts exploring with an empty current activity.
    pub fn new(generator: Generator<D>, session: Session) -> Self {
        Self {
            generator,
            session,
            current: None,
        }
    }

    /// Parses and runs one input line. Usage errors and help come back as
    /// text to print.
    pub async fn handle_line(&mut self, line: &str) -> Outcome {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Outcome::Continue(String::new());
        }
        match ExploreLine::try_parse_from(words) {
            Ok(parsed) => self.run(parsed.command).await,
            Err(e) => Outcome::Continue(e.render().to_string()),
        }
    }

    /// Runs one command.
    #[instrument(skip(self))]
    pub async fn run(&mut self, command: ExploreCommand) -> Outcome {
        let text = match command {
            ExploreCommand::Wander {
                category,
                difficulty,
            } => {
                let activity = self.generator.generate_activity(category, difficulty).await;
                let text = render::activity(&activity);
                self.current = Some(activity);
                text
            }
            ExploreCommand::Complete => match self.current.take() {
                Some(activity) => render::completion(&self.session.complete(activity)),
                None => no_current("complete"),
            },
            ExploreCommand::Save => match &self.current {
                Some(activity) => {
                    self.session.save(activity.clone());
                    "Activity saved for later!\n".to_string()
                }
                None => no_current("save"),
            },
            ExploreCommand::Quest { difficulty, steps } => {
                let quest = self.generator.generate_quest(difficulty, steps).await;
                let heading = format!("{steps}-Step Quest ({difficulty}):");
                render::quest(&quest, Some(&heading))
            }
            ExploreCommand::Challenge { activities } => {
                render::challenge(&self.generator.generate_challenge(activities).await)
            }
            ExploreCommand::Profile => render::profile(&self.session),
            ExploreCommand::Rename { name } => match self.session.rename(&name.join(" ")) {
                Ok(()) => format!("Username updated to {}\n", self.session.username()),
                Err(e) => match e.kind() {
                    WanderlustErrorKind::Session(session) => format!("{}\n", session.kind),
                    other => format!("{other}\n"),
                },
            },
            ExploreCommand::Quit => return Outcome::Quit,
        };
        Outcome::Continue(text)
    }
}

fn no_current(action: &str) -> String {
    let err = SessionError::new(SessionErrorKind::NoCurrentActivity(action.to_string()));
    debug!(error = %err, "Command needs an activity");
    format!("{}\n", err.kind)
}
