//! A fully populated activity ready for display and scoring.

use crate::Category;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An activity with every field filled in and the user's category attached.
///
/// Produced from an [`ActivityRecord`](crate::ActivityRecord) after absent
/// fields were replaced by a sentinel.
///
/// # Examples
///
/// ```
/// use wanderlust_core::{Activity, Category};
///
/// let activity = Activity::new("Kala Ghoda walk", "Browse the galleries", "1 hour", "Easy", Category::Culture);
/// assert_eq!(activity.title(), "Kala Ghoda walk");
/// assert_eq!(*activity.category(), Category::Culture);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Activity {
    /// Short title
    title: String,
    /// One-line description
    description: String,
    /// Free-form time estimate
    time_estimate: String,
    /// Difficulty as the model phrased it
    difficulty: String,
    /// Category the user asked for
    category: Category,
}

impl Activity {
    /// Creates an activity from its parts.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        time_estimate: impl Into<String>,
        difficulty: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            time_estimate: time_estimate.into(),
            difficulty: difficulty.into(),
            category,
        }
    }
}
