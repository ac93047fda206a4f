//! Records reconstructed from model-generated `key: value` text.
//!
//! Field values are kept exactly as the model wrote them (trimmed). Nothing is
//! coerced into numbers or durations, and a missing field is `None` rather
//! than an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Untyped `key: value` mapping from a single block of text.
///
/// Keys are lowercased and trimmed; a repeated key keeps its last value.
///
/// # Examples
///
/// ```
/// use wanderlust_core::FlatRecord;
///
/// let mut record = FlatRecord::new();
/// record.insert("Title", "First");
/// record.insert("title", "Second");
/// assert_eq!(record.get("title"), Some("Second"));
/// assert_eq!(record.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatRecord {
    fields: BTreeMap<String, String>,
}

impl FlatRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, normalizing the key. Returns the value it replaced.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        let key = key.as_ref().trim().to_lowercase();
        self.fields.insert(key, value.into())
    }

    /// Looks up a field by its normalized name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Checks whether a field is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of distinct fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no line of the input was usable.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the record back into `key: value` lines.
    pub fn to_text(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{key}: {value}\n"))
            .collect()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for FlatRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = FlatRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

/// One activity as the model described it, every field optional.
///
/// Used both for a standalone activity and for each member of a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Short title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// One-line description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form estimate such as `30 min`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<String>,
    /// Difficulty exactly as the model phrased it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl ActivityRecord {
    /// True when none of the four fields is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.time_estimate.is_none()
            && self.difficulty.is_none()
    }

    /// Renders the present fields as flat `key: value` lines.
    pub fn to_text(&self) -> String {
        FlatRecord::from(self).to_text()
    }
}

impl From<&FlatRecord> for ActivityRecord {
    fn from(record: &FlatRecord) -> Self {
        let field = |name: &str| record.get(name).map(str::to_string);
        Self {
            title: field("title"),
            description: field("description"),
            time_estimate: field("time_estimate"),
            difficulty: field("difficulty"),
        }
    }
}

impl From<&ActivityRecord> for FlatRecord {
    fn from(record: &ActivityRecord) -> Self {
        [
            ("title", &record.title),
            ("description", &record.description),
            ("time_estimate", &record.time_estimate),
            ("difficulty", &record.difficulty),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
        .collect()
    }
}

/// One step of a quest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QuestStep {
    /// Step title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_title: Option<String>,
    /// What to do at this step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_description: Option<String>,
    /// Free-form estimate such as `45 min`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<String>,
}

impl QuestStep {
    /// True when none of the three fields is present.
    pub fn is_empty(&self) -> bool {
        self.step_title.is_none() && self.step_description.is_none() && self.time_estimate.is_none()
    }
}
