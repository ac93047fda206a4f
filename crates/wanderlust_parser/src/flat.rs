//! Flat `key: value` records.

use crate::line::{significant_lines, split_key_value};
use tracing::debug;
use wanderlust_core::{ActivityRecord, FlatRecord};

/// Parse text into a flat key/value record.
///
/// Every non-blank line containing `": "` contributes one field: the key is
/// trimmed and lowercased, the value trimmed. A repeated key keeps the value
/// from its last occurrence. Lines without the separator are skipped and
/// reported at debug level; they never affect other lines.
///
/// No field is required. Empty or entirely malformed input yields an empty
/// record.
///
/// # Examples
///
/// ```
/// use wanderlust_parser::parse_flat_record;
///
/// let record = parse_flat_record("Title: Irani cafe\nsome chatter\ntitle: Kyani & Co.");
/// assert_eq!(record.get("title"), Some("Kyani & Co."));
/// assert_eq!(record.len(), 1);
/// ```
pub fn parse_flat_record(text: &str) -> FlatRecord {
    significant_lines(text).fold(FlatRecord::new(), |mut record, line| {
        match split_key_value(line) {
            Some((key, value)) => {
                record.insert(key, value);
            }
            None => debug!(line = %line, "Failed to parse line, no key/value separator; skipping"),
        }
        record
    })
}

/// Parse text into an [`ActivityRecord`], keeping only the activity fields.
///
/// Keys other than `title`, `description`, `time_estimate` and `difficulty`
/// are dropped.
pub fn parse_activity(text: &str) -> ActivityRecord {
    ActivityRecord::from(&parse_flat_record(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_model_answer() {
        let text = "\
title: Heritage walk at Flora Fountain
description: Trace the Gothic facades around Hutatma Chowk.
time_estimate: 45 min
difficulty: Easy
";
        let record = parse_flat_record(text);
        assert_eq!(record.len(), 4);
        assert_eq!(record.get("time_estimate"), Some("45 min"));
    }

    #[test]
    fn test_empty_input_gives_empty_record() {
        assert!(parse_flat_record("").is_empty());
        assert!(parse_flat_record("\n\n   \n").is_empty());
    }

    #[test]
    fn test_prose_lines_are_skipped() {
        let record = parse_flat_record("Sure! Here is your activity.\ntitle: Chai\nEnjoy!");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("title"), Some("Chai"));
    }

    #[test]
    fn test_empty_key_is_kept() {
        let record = parse_flat_record(": orphan value");
        assert_eq!(record.get(""), Some("orphan value"));
    }
}
