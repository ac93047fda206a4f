//! Activity categories and difficulty levels offered to the user.

use serde::{Deserialize, Serialize};

/// Kind of activity the user asks for.
///
/// Parsing is case-insensitive so CLI input like `food` or `FOOD` works.
///
/// # Examples
///
/// ```
/// use wanderlust_core::Category;
/// use std::str::FromStr;
///
/// assert_eq!(Category::from_str("culture").unwrap(), Category::Culture);
/// assert_eq!(Category::Food.to_string(), "Food");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    /// Street food, cafes, markets
    Food,
    /// Museums, heritage walks, performances
    Culture,
    /// Outdoor and exploratory activities
    Adventure,
}

/// Requested difficulty of an activity or quest.
///
/// Generated records keep the model's difficulty text verbatim; this enum is
/// only what the user selects when asking.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Relaxed, short
    #[default]
    Easy,
    /// Some walking or planning
    Medium,
    /// Long or demanding
    Hard,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_parse_ignores_case() {
        assert_eq!(Category::from_str("FOOD").unwrap(), Category::Food);
        assert_eq!(Category::from_str("Adventure").unwrap(), Category::Adventure);
        assert!(Category::from_str("shopping").is_err());
    }

    #[test]
    fn test_difficulty_display_round_trips() {
        for difficulty in Difficulty::iter() {
            let shown = difficulty.to_string();
            assert_eq!(Difficulty::from_str(&shown).unwrap(), difficulty);
        }
    }
}
