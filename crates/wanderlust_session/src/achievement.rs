//! Achievements unlocked by completed activities.

use serde::{Deserialize, Serialize};
use wanderlust_core::{Activity, Category};

/// A badge earned once per session.
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
    strum::EnumIter,
)]
pub enum Achievement {
    /// Five completed food activities
    #[strum(serialize = "Mumbai Foodie")]
    MumbaiFoodie,
    /// Three completed hard activities
    #[strum(serialize = "Urban Explorer")]
    UrbanExplorer,
}

impl Achievement {
    /// Completed activities needed to unlock.
    pub fn threshold(self) -> usize {
        match self {
            Achievement::MumbaiFoodie => 5,
            Achievement::UrbanExplorer => 3,
        }
    }

    /// Whether `activity` counts towards this achievement.
    pub fn counts(self, activity: &Activity) -> bool {
        match self {
            Achievement::MumbaiFoodie => *activity.category() == Category::Food,
            Achievement::UrbanExplorer => activity.difficulty().to_lowercase() == "hard",
        }
    }

    /// Whether `completed` satisfies the threshold.
    pub fn is_earned<'a>(self, completed: impl IntoIterator<Item = &'a Activity>) -> bool {
        completed.into_iter().filter(|a| self.counts(a)).count() >= self.threshold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Achievement::MumbaiFoodie.to_string(), "Mumbai Foodie");
        assert_eq!(Achievement::UrbanExplorer.to_string(), "Urban Explorer");
    }

    #[test]
    fn test_foodie_counts_category_not_difficulty() {
        let food = Activity::new("Vada pav", "d", "t", "Hard", Category::Food);
        let culture = Activity::new("Museum", "d", "t", "Hard", Category::Culture);
        assert!(Achievement::MumbaiFoodie.counts(&food));
        assert!(!Achievement::MumbaiFoodie.counts(&culture));
        assert!(Achievement::UrbanExplorer.counts(&culture));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let hard = Activity::new("Climb", "d", "t", "hard", Category::Adventure);
        let two = vec![hard.clone(), hard.clone()];
        assert!(!Achievement::UrbanExplorer.is_earned(&two));
        let three = vec![hard.clone(), hard.clone(), hard];
        assert!(Achievement::UrbanExplorer.is_earned(&three));
    }
}
