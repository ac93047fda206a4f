//! Plain-text and JSON rendering.
//!
//! Absent grouped fields render as empty strings.

use crate::Parsed;
use serde::Serialize;
use std::fmt::Write;
use wanderlust_core::{Activity, ActivityRecord, QuestStep};
use wanderlust_error::{JsonError, WanderlustResult};
use wanderlust_session::{Completion, Session};

fn or_blank(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Renders one activity.
pub fn activity(activity: &Activity) -> String {
    format!(
        "Title: {}\nDescription: {}\nTime Estimate: {}\nDifficulty: {}\nCategory: {}\n",
        activity.title(),
        activity.description(),
        activity.time_estimate(),
        activity.difficulty(),
        activity.category()
    )
}

/// Renders quest steps under a heading, numbered from 1.
pub fn quest(steps: &[QuestStep], heading: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(heading) = heading {
        let _ = writeln!(out, "{heading}");
    }
    for (index, step) in steps.iter().enumerate() {
        let _ = writeln!(out, "Step {}: {}", index + 1, or_blank(&step.step_title));
        let _ = writeln!(out, "{}", or_blank(&step.step_description));
        let _ = writeln!(out, "Time Estimate: {}", or_blank(&step.time_estimate));
        out.push('\n');
    }
    out
}

/// Renders challenge activities separated by rules.
pub fn challenge(activities: &[ActivityRecord]) -> String {
    let mut out = String::from("Your Challenge Activities:\n");
    for (index, activity) in activities.iter().enumerate() {
        let _ = writeln!(out, "Activity {}: {}", index + 1, or_blank(&activity.title));
        let _ = writeln!(out, "{}", or_blank(&activity.description));
        let _ = writeln!(out, "Time Estimate: {}", or_blank(&activity.time_estimate));
        let _ = writeln!(out, "Difficulty: {}", or_blank(&activity.difficulty));
        let _ = writeln!(out, "{:-<40}", "");
    }
    out
}

/// Renders any offline parse result.
pub fn parsed(parsed: &Parsed) -> String {
    match parsed {
        Parsed::Activity(a) => activity(a),
        Parsed::Quest(steps) => quest(steps, None),
        Parsed::Challenge(activities) => challenge(activities),
    }
}

/// Renders the outcome of completing an activity.
pub fn completion(completion: &Completion) -> String {
    let mut out = format!(
        "Activity completed! You earned {} points.\n",
        completion.points_gained()
    );
    for achievement in completion.unlocked() {
        let _ = writeln!(out, "New Achievement Unlocked: {achievement}!");
    }
    out
}

/// Renders the profile page.
pub fn profile(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Username: {}", session.username());
    let _ = writeln!(out, "Total Points: {}", session.points());

    out.push_str("\nAchievements:\n");
    if session.achievements().is_empty() {
        out.push_str("No achievements yet. Complete activities to unlock them!\n");
    }
    for achievement in session.achievements() {
        let _ = writeln!(out, "- {achievement}");
    }

    out.push_str("\nCompleted Activities:\n");
    if session.completed().is_empty() {
        out.push_str("You haven't completed any activities yet.\n");
    }
    for (index, done) in session.completed().iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({}, {})",
            index + 1,
            done.title(),
            done.category(),
            done.difficulty()
        );
    }

    out.push_str("\nSaved Activities:\n");
    if session.saved().is_empty() {
        out.push_str("No activities saved.\n");
    }
    for (index, saved) in session.saved().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, saved.title());
    }
    out
}

/// Pretty-printed JSON.
///
/// # Errors
///
/// Returns a `JsonError` if `value` cannot be serialized.
pub fn json<T: Serialize + ?Sized>(value: &T) -> WanderlustResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()).into())
}
