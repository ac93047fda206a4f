//! The in-memory user session.

use crate::{Achievement, award_points};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};
use wanderlust_config::SessionConfig;
use wanderlust_core::Activity;
use wanderlust_error::{SessionError, SessionErrorKind, WanderlustResult};

/// What completing one activity changed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct Completion {
    /// Points added to the total
    points_gained: u32,
    /// Achievements unlocked by this completion, usually none
    unlocked: Vec<Achievement>,
}

/// Points, history and achievements for one user, kept in memory only.
///
/// # Examples
///
/// ```
/// use wanderlust_core::{Activity, Category};
/// use wanderlust_session::Session;
///
/// let mut session = Session::new("Wanderer");
/// let chai = Activity::new("Cutting chai", "At a tapri", "15 min", "Easy", Category::Food);
/// let completion = session.complete(chai);
/// assert_eq!(*completion.points_gained(), 10);
/// assert_eq!(*session.points(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Session {
    /// Display name
    username: String,
    /// Running point total
    points: u32,
    /// Completed activities, oldest first
    completed: Vec<Activity>,
    /// Activities saved for later, oldest first
    saved: Vec<Activity>,
    /// Unlocked achievements in unlock order
    achievements: Vec<Achievement>,
}

impl Default for Session {
    fn default() -> Self {
        Self::from(&SessionConfig::default())
    }
}

impl From<&SessionConfig> for Session {
    fn from(config: &SessionConfig) -> Self {
        Self::new(config.username.clone())
    }
}

impl Session {
    /// Starts an empty session.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            points: 0,
            completed: Vec::new(),
            saved: Vec::new(),
            achievements: Vec::new(),
        }
    }

    /// Records a completed activity, awards its points and unlocks any
    /// achievement newly earned.
    #[instrument(skip(self, activity), fields(title = %activity.title()))]
    pub fn complete(&mut self, activity: Activity) -> Completion {
        let points_gained = award_points(&activity);
        self.points = self.points.saturating_add(points_gained);
        self.completed.push(activity);
        info!(points_gained, total = self.points, "Activity completed");

        let unlocked: Vec<Achievement> = Achievement::iter()
            .filter(|a| !self.achievements.contains(a) && a.is_earned(&self.completed))
            .collect();
        for achievement in &unlocked {
            info!(achievement = %achievement, "Achievement unlocked");
        }
        self.achievements.extend(unlocked.iter().copied());

        Completion {
            points_gained,
            unlocked,
        }
    }

    /// Keeps an activity for later without awarding points.
    pub fn save(&mut self, activity: Activity) {
        debug!(title = %activity.title(), "Activity saved");
        self.saved.push(activity);
    }

    /// Changes the display name.
    ///
    /// # Errors
    ///
    /// Returns `SessionErrorKind::EmptyUsername` for a blank name; the
    /// current name is kept.
    pub fn rename(&mut self, username: &str) -> WanderlustResult<()> {
        let username = username.trim();
        if username.is_empty() {
            return Err(SessionError::new(SessionErrorKind::EmptyUsername).into());
        }
        debug!(from = %self.username, to = %username, "Username changed");
        self.username = username.to_string();
        Ok(())
    }

    /// Number of completed activities.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Whether `achievement` has been unlocked.
    pub fn has(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }
}
