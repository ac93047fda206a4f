//! Fallback values applied after parsing.
//!
//! The parser itself reports absence as `None` or an empty list. The
//! application still has to show something, so it substitutes these.

use wanderlust_core::{Activity, ActivityRecord, Category, QuestStep};

/// Value shown for a required activity field the model did not provide.
pub const MISSING: &str = "Missing";

const NOTHING_GENERATED: &str = "No valid lines returned by AI.";
const NOT_AVAILABLE: &str = "N/A";

/// Fill absent activity fields with [`MISSING`] and stamp the category.
///
/// # Examples
///
/// ```
/// use wanderlust_core::Category;
/// use wanderlust_parser::{MISSING, apply_defaults, parse_activity};
///
/// let activity = apply_defaults(parse_activity(""), Category::Food);
/// assert_eq!(activity.title(), MISSING);
/// assert_eq!(activity.difficulty(), MISSING);
/// assert_eq!(*activity.category(), Category::Food);
/// ```
pub fn apply_defaults(record: ActivityRecord, category: Category) -> Activity {
    let or_missing = |value: Option<String>| value.unwrap_or_else(|| MISSING.to_string());
    Activity::new(
        or_missing(record.title),
        or_missing(record.description),
        or_missing(record.time_estimate),
        or_missing(record.difficulty),
        category,
    )
}

/// The single step shown when a quest came back unusable.
pub fn placeholder_step() -> QuestStep {
    QuestStep {
        step_title: Some("Untitled Step".to_string()),
        step_description: Some(NOTHING_GENERATED.to_string()),
        time_estimate: Some(NOT_AVAILABLE.to_string()),
    }
}

/// The single activity shown when a challenge came back unusable.
pub fn placeholder_challenge_activity() -> ActivityRecord {
    ActivityRecord {
        title: Some("Untitled".to_string()),
        description: Some(NOTHING_GENERATED.to_string()),
        time_estimate: Some(NOT_AVAILABLE.to_string()),
        difficulty: Some("Medium".to_string()),
    }
}

/// Replace an empty list with exactly one placeholder.
pub fn or_placeholder<R>(records: Vec<R>, placeholder: impl FnOnce() -> R) -> Vec<R> {
    if records.is_empty() {
        vec![placeholder()]
    } else {
        records
    }
}

/// [`or_placeholder`] for quest steps.
pub fn steps_or_placeholder(steps: Vec<QuestStep>) -> Vec<QuestStep> {
    or_placeholder(steps, placeholder_step)
}

/// [`or_placeholder`] for challenge activities.
pub fn activities_or_placeholder(activities: Vec<ActivityRecord>) -> Vec<ActivityRecord> {
    or_placeholder(activities, placeholder_challenge_activity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_fields_survive_defaulting() {
        let record = ActivityRecord {
            title: Some("Oval Maidan cricket".to_string()),
            difficulty: Some("Medium".to_string()),
            ..Default::default()
        };
        let activity = apply_defaults(record, Category::Adventure);
        assert_eq!(activity.title(), "Oval Maidan cricket");
        assert_eq!(activity.description(), MISSING);
        assert_eq!(activity.time_estimate(), MISSING);
        assert_eq!(activity.difficulty(), "Medium");
    }

    #[test]
    fn test_placeholder_only_for_empty_lists() {
        assert_eq!(steps_or_placeholder(Vec::new()), vec![placeholder_step()]);

        let steps = vec![QuestStep {
            step_title: Some("A".to_string()),
            ..Default::default()
        }];
        assert_eq!(steps_or_placeholder(steps.clone()), steps);
    }

    #[test]
    fn test_challenge_placeholder_is_medium() {
        let activities = activities_or_placeholder(Vec::new());
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].title.as_deref(), Some("Untitled"));
        assert_eq!(activities[0].difficulty.as_deref(), Some("Medium"));
    }
}
