//! Points per completed activity.

use wanderlust_core::Activity;

const HARD_POINTS: u32 = 20;
const MEDIUM_POINTS: u32 = 15;
const BASE_POINTS: u32 = 10;

/// Points earned for completing `activity`.
///
/// The difficulty text is compared case-insensitively: `hard` earns 20,
/// `medium` 15, anything else (including `Missing`) 10.
///
/// # Examples
///
/// ```
/// use wanderlust_core::{Activity, Category};
/// use wanderlust_session::award_points;
///
/// let activity = Activity::new("Sassoon Dock at dawn", "Watch the catch come in", "2 hours", "HARD", Category::Adventure);
/// assert_eq!(award_points(&activity), 20);
/// ```
pub fn award_points(activity: &Activity) -> u32 {
    match activity.difficulty().to_lowercase().as_str() {
        "hard" => HARD_POINTS,
        "medium" => MEDIUM_POINTS,
        _ => BASE_POINTS,
    }
}
