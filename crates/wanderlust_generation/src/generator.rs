//! Prompt, acquire, parse, default.

use crate::prompt::{activity_prompt, challenge_prompt, quest_prompt};
use derive_getters::Getters;
use std::ops::RangeInclusive;
use tracing::{debug, instrument, warn};
use wanderlust_config::GenerationConfig;
use wanderlust_core::{Activity, ActivityRecord, Category, Difficulty, QuestStep};
use wanderlust_interface::WanderlustDriver;
use wanderlust_models::Acquirer;
use wanderlust_parser::{
    activities_or_placeholder, apply_defaults, parse_activity, parse_challenge_activities,
    parse_quest_steps, steps_or_placeholder, strip_markup,
};

/// Allowed number of quest steps.
pub const QUEST_STEPS: RangeInclusive<u8> = 3..=5;
/// Quest steps when the user does not choose.
pub const DEFAULT_QUEST_STEPS: u8 = 3;
/// Allowed number of challenge activities.
pub const CHALLENGE_ACTIVITIES: RangeInclusive<u8> = 2..=5;
/// Challenge activities when the user does not choose.
pub const DEFAULT_CHALLENGE_ACTIVITIES: u8 = 3;

fn clamp_to(value: u8, range: &RangeInclusive<u8>, what: &str) -> u8 {
    let clamped = value.clamp(*range.start(), *range.end());
    if clamped != value {
        warn!(requested = value, used = clamped, what, "Count out of range, clamping");
    }
    clamped
}

/// Generates activities, quests and challenges for one location.
///
/// Never fails: an unusable answer becomes sentinel values or a single
/// placeholder record.
#[derive(Debug, Clone, Getters)]
pub struct Generator<D> {
    /// Text source
    acquirer: Acquirer<D>,
    /// Location and token budgets
    config: GenerationConfig,
}

impl<D: WanderlustDriver> Generator<D> {
    /// Creates a generator.
    pub fn new(acquirer: Acquirer<D>, config: GenerationConfig) -> Self {
        Self { acquirer, config }
    }

    /// One activity in `category`, with absent fields set to `Missing`.
    #[instrument(skip(self), fields(location = %self.config.location))]
    pub async fn generate_activity(&self, category: Category, difficulty: Difficulty) -> Activity {
        let prompt = activity_prompt(&self.config.location, category, difficulty);
        let text = self
            .acquirer
            .acquire(&prompt, self.config.activity_max_tokens)
            .await;

        let record = parse_activity(&text);
        if record.is_empty() {
            warn!("No activity fields in model answer");
        }
        apply_defaults(record, category)
    }

    /// Quest steps, or a single placeholder step if none could be parsed.
    ///
    /// `num_steps` is clamped to [`QUEST_STEPS`]. Quotes and asterisks are
    /// removed from the answer before parsing.
    #[instrument(skip(self), fields(location = %self.config.location))]
    pub async fn generate_quest(&self, difficulty: Difficulty, num_steps: u8) -> Vec<QuestStep> {
        let num_steps = clamp_to(num_steps, &QUEST_STEPS, "quest steps");
        let prompt = quest_prompt(&self.config.location, difficulty, num_steps);
        let text = self
            .acquirer
            .acquire(&prompt, self.config.quest_max_tokens)
            .await;

        let steps = parse_quest_steps(&strip_markup(&text));
        debug!(requested = num_steps, parsed = steps.len(), "Parsed quest steps");
        steps_or_placeholder(steps)
    }

    /// Challenge activities, or a single placeholder if none could be parsed.
    ///
    /// `num_activities` is clamped to [`CHALLENGE_ACTIVITIES`].
    #[instrument(skip(self), fields(location = %self.config.location))]
    pub async fn generate_challenge(&self, num_activities: u8) -> Vec<ActivityRecord> {
        let num_activities = clamp_to(num_activities, &CHALLENGE_ACTIVITIES, "challenge activities");
        let prompt = challenge_prompt(&self.config.location, num_activities);
        let text = self
            .acquirer
            .acquire(&prompt, self.config.challenge_max_tokens)
            .await;

        let activities = parse_challenge_activities(&text);
        debug!(
            requested = num_activities,
            parsed = activities.len(),
            "Parsed challenge activities"
        );
        activities_or_placeholder(activities)
    }
}
