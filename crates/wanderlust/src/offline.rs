//! Parsing saved model answers without calling a model.

use serde::Serialize;
use wanderlust_core::{Activity, ActivityRecord, Category, QuestStep};
use wanderlust_parser::{
    activities_or_placeholder, apply_defaults, parse_activity, parse_challenge_activities,
    parse_quest_steps, steps_or_placeholder, strip_markup,
};

/// Which record shape a text holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RecordKind {
    /// Flat `key: value` activity
    Activity,
    /// `stepN_<field>` lines
    Quest,
    /// `activityN_<field>` lines
    Challenge,
}

/// Records read from text, with the same defaults generation applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Parsed {
    /// A single activity
    Activity(Activity),
    /// Quest steps, never empty
    Quest(Vec<QuestStep>),
    /// Challenge activities, never empty
    Challenge(Vec<ActivityRecord>),
}

/// Parse `text` as `kind`, applying sentinel defaults and placeholders.
///
/// `category` is stamped onto activities and ignored otherwise.
pub fn parse_text(kind: RecordKind, text: &str, category: Category) -> Parsed {
    match kind {
        RecordKind::Activity => Parsed::Activity(apply_defaults(parse_activity(text), category)),
        RecordKind::Quest => {
            Parsed::Quest(steps_or_placeholder(parse_quest_steps(&strip_markup(text))))
        }
        RecordKind::Challenge => {
            Parsed::Challenge(activities_or_placeholder(parse_challenge_activities(text)))
        }
    }
}
