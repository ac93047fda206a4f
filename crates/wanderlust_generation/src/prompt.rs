//! Prompt builders.
//!
//! Each prompt spells out the exact line shape the parser reads back, one
//! field per line, no JSON.

use wanderlust_core::{Category, Difficulty};

/// Prompt for a single activity answered as flat `key: value` lines.
///
/// # Examples
///
/// ```
/// use wanderlust_core::{Category, Difficulty};
/// use wanderlust_generation::prompt::activity_prompt;
///
/// let prompt = activity_prompt("Churchgate, Mumbai", Category::Food, Difficulty::Easy);
/// assert!(prompt.contains("Category: Food"));
/// assert!(prompt.contains("time_estimate: <e.g. '30 min'>"));
/// ```
pub fn activity_prompt(location: &str, category: Category, difficulty: Difficulty) -> String {
    format!(
        "You are an AI that generates a local activity in {location}.
Category: {category}
Difficulty: {difficulty}

Return the result in plain text, with one field per line:
title: <short title>
description: <one-line description>
time_estimate: <e.g. '30 min'>
difficulty: <same difficulty above or a variation>

No JSON. Just plain text.
"
    )
}

/// Prompt for a quest answered as `stepN_<field>` lines.
pub fn quest_prompt(location: &str, difficulty: Difficulty, num_steps: u8) -> String {
    format!(
        "You are an AI that generates a themed quest (adventure) in {location}.
Difficulty: {difficulty}
Number of steps: {num_steps}

Return the result in plain text, each step in separate lines, exactly as below:
step1_title: ...
step1_description: ...
step1_time_estimate: ...
step2_title: ...
etc.

Make it realistic as in something people can explore and do in real life.
No JSON. Just plain text, no markdown language as well.
"
    )
}

/// Prompt for a challenge answered as `activityN_<field>` lines.
pub fn challenge_prompt(location: &str, num_activities: u8) -> String {
    format!(
        "You are an AI that generates a challenge-mode set of activities in {location}.
Number of activities: {num_activities}

Return them in plain text, each activity in lines like:
activity1_title: ...
activity1_description: ...
activity1_time_estimate: ...
activity1_difficulty: ...
activity2_title: ...
etc.

No JSON. Just plain text.
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_interpolated() {
        let prompt = quest_prompt("Colaba, Mumbai", Difficulty::Hard, 4);
        assert!(prompt.contains("quest (adventure) in Colaba, Mumbai."));
        assert!(prompt.contains("Difficulty: Hard"));
        assert!(prompt.contains("Number of steps: 4"));
    }

    #[test]
    fn test_challenge_prompt_lists_all_activity_fields() {
        let prompt = challenge_prompt("Churchgate, Mumbai", 2);
        for field in ["title", "description", "time_estimate", "difficulty"] {
            assert!(prompt.contains(&format!("activity1_{field}: ...")));
        }
    }
}
