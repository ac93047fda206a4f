//! Grouped records: `<prefix><ordinal>_<field>: value`.
//!
//! Quest steps (`step1_title`, `step1_description`, ...) and challenge
//! activities (`activity2_difficulty`, ...) share one folding algorithm,
//! parameterized by [`GroupedRecord`].

use crate::line::{SEPARATOR, significant_lines, split_key_value};
use std::fmt;
use tracing::{debug, trace};
use wanderlust_core::{ActivityRecord, QuestStep};

/// A record type that can be reassembled from prefixed, numbered lines.
pub trait GroupedRecord: Default {
    /// Literal every key of this group starts with, e.g. `step`.
    const PREFIX: &'static str;

    /// Stores `value` for the field named after the underscore.
    ///
    /// Returns `false` if the field is not part of this record's vocabulary.
    fn assign(&mut self, field: &str, value: &str) -> bool;

    /// True when no recognized field has been stored.
    fn is_empty(&self) -> bool;

    /// Present fields as `(field, value)` pairs in vocabulary order.
    fn fields(&self) -> Vec<(&'static str, &str)>;
}

impl GroupedRecord for QuestStep {
    const PREFIX: &'static str = "step";

    fn assign(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "title" => &mut self.step_title,
            "description" => &mut self.step_description,
            "time_estimate" => &mut self.time_estimate,
            _ => return false,
        };
        *slot = Some(value.to_string());
        true
    }

    fn is_empty(&self) -> bool {
        QuestStep::is_empty(self)
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("title", &self.step_title),
            ("description", &self.step_description),
            ("time_estimate", &self.time_estimate),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

impl GroupedRecord for ActivityRecord {
    const PREFIX: &'static str = "activity";

    fn assign(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "title" => &mut self.title,
            "description" => &mut self.description,
            "time_estimate" => &mut self.time_estimate,
            "difficulty" => &mut self.difficulty,
            _ => return false,
        };
        *slot = Some(value.to_string());
        true
    }

    fn is_empty(&self) -> bool {
        ActivityRecord::is_empty(self)
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("time_estimate", &self.time_estimate),
            ("difficulty", &self.difficulty),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

/// Group number taken from the digits of a key's group part.
///
/// Held as a canonical digit string (no leading zeros) so arbitrarily long
/// numbers compare correctly: `step01` and `step1` are the same group.
/// A group part without digits is group `1`. Only ASCII digits count, so
/// other scripts' numerals leave the part without an ordinal.
///
/// # Examples
///
/// ```
/// use wanderlust_parser::Ordinal;
///
/// assert_eq!(Ordinal::from_group_part("step01"), Ordinal::from_group_part("step1"));
/// assert_eq!(Ordinal::from_group_part("step").to_string(), "1");
/// assert_eq!(Ordinal::from_group_part("activity0").to_string(), "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ordinal(String);

impl Ordinal {
    /// Extracts the ordinal from the text before the first underscore.
    pub fn from_group_part(group_part: &str) -> Self {
        let digits: String = group_part.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Self("1".to_string());
        }
        match digits.trim_start_matches('0') {
            "" => Self("0".to_string()),
            significant => Self(significant.to_string()),
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fold state: finished records, the record being filled, and its ordinal.
struct Accumulator<R> {
    completed: Vec<R>,
    current: R,
    ordinal: Option<Ordinal>,
}

impl<R: GroupedRecord> Accumulator<R> {
    fn new() -> Self {
        Self {
            completed: Vec::new(),
            current: R::default(),
            ordinal: None,
        }
    }

    fn flush(&mut self) {
        let finished = std::mem::take(&mut self.current);
        if !finished.is_empty() {
            self.completed.push(finished);
        }
    }

    fn feed(mut self, line: &str) -> Self {
        let Some((key, value)) = split_key_value(line) else {
            debug!(line = %line, prefix = R::PREFIX, "Failed to parse grouped line, no key/value separator; skipping");
            return self;
        };

        if !key.starts_with(R::PREFIX) {
            debug!(key = %key, prefix = R::PREFIX, "Line doesn't match group format; skipping");
            return self;
        }

        let Some((group_part, field)) = key.split_once('_') else {
            debug!(key = %key, prefix = R::PREFIX, "Could not find underscore in key; skipping");
            return self;
        };

        let ordinal = Ordinal::from_group_part(group_part);

        // A change of ordinal always opens a new record, even when the text
        // returns to an ordinal it used before. `step1, step2, step1` gives
        // three records, not two.
        if self.ordinal.as_ref() != Some(&ordinal) {
            self.flush();
            self.ordinal = Some(ordinal);
        }

        if !self.current.assign(field, value) {
            trace!(key = %key, field = %field, "Unrecognized field in group; ignoring");
        }
        self
    }

    fn finish(mut self) -> Vec<R> {
        self.flush();
        self.completed
    }
}

/// Parse text into an ordered list of grouped records.
///
/// Records appear in the order their ordinals first appear in the text, not
/// in numeric order. Lines that lack `": "`, don't start with
/// [`GroupedRecord::PREFIX`], or have no underscore in the key are skipped and
/// reported at debug level. Unknown field names inside a valid group line are
/// ignored. A group that ends up with no recognized field is dropped.
///
/// Empty input, or input with no matching line, yields an empty list.
///
/// # Examples
///
/// ```
/// use wanderlust_parser::parse_grouped;
/// use wanderlust_core::ActivityRecord;
///
/// let text = "activity2_title: X\nactivity2_difficulty: Hard\nactivity1_title: Y";
/// let activities: Vec<ActivityRecord> = parse_grouped(text);
/// assert_eq!(activities[0].title.as_deref(), Some("X"));
/// assert_eq!(activities[1].title.as_deref(), Some("Y"));
/// ```
pub fn parse_grouped<R: GroupedRecord>(text: &str) -> Vec<R> {
    significant_lines(text)
        .fold(Accumulator::<R>::new(), Accumulator::feed)
        .finish()
}

/// Parse `stepN_<field>` lines into quest steps.
pub fn parse_quest_steps(text: &str) -> Vec<QuestStep> {
    parse_grouped(text)
}

/// Parse `activityN_<field>` lines into challenge activities.
pub fn parse_challenge_activities(text: &str) -> Vec<ActivityRecord> {
    parse_grouped(text)
}

/// Render records back into grouped lines, numbering them from 1.
///
/// Parsing the output with [`parse_grouped`] yields the same records, as
/// long as none of them is empty.
///
/// # Examples
///
/// ```
/// use wanderlust_core::QuestStep;
/// use wanderlust_parser::serialize_grouped;
///
/// let steps = vec![QuestStep {
///     step_title: Some("Gateway".to_string()),
///     ..Default::default()
/// }];
/// assert_eq!(serialize_grouped(&steps), "step1_title: Gateway\n");
/// ```
pub fn serialize_grouped<R: GroupedRecord>(records: &[R]) -> String {
    let mut out = String::new();
    for (index, record) in records.iter().enumerate() {
        for (field, value) in record.fields() {
            out.push_str(&format!(
                "{}{}_{}{}{}\n",
                R::PREFIX,
                index + 1,
                field,
                SEPARATOR,
                value
            ));
        }
    }
    out
}
