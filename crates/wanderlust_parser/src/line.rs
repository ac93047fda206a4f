//! Splitting a single line into key and value.

/// Separator between key and value.
pub(crate) const SEPARATOR: &str = ": ";

/// Splits a trimmed, non-blank line at the first `": "`.
///
/// The key comes back trimmed and lowercased, the value trimmed. Returns
/// `None` when the line has no separator.
pub(crate) fn split_key_value(line: &str) -> Option<(String, &str)> {
    let (key, value) = line.split_once(SEPARATOR)?;
    Some((key.trim().to_lowercase(), value.trim()))
}

/// Yields the trimmed, non-blank lines of `text`.
pub(crate) fn significant_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_at_first_separator_only() {
        let (key, value) = split_key_value("Note: meet at: Gate 2").unwrap();
        assert_eq!(key, "note");
        assert_eq!(value, "meet at: Gate 2");
    }

    #[test]
    fn test_colon_without_space_is_not_a_separator() {
        assert!(split_key_value("time:30min").is_none());
        assert!(split_key_value("title:").is_none());
    }

    #[test]
    fn test_key_is_trimmed_and_lowercased() {
        let (key, value) = split_key_value("  Time_Estimate : 2 hours ").unwrap();
        assert_eq!(key, "time_estimate");
        assert_eq!(value, "2 hours");
    }

    #[test]
    fn test_significant_lines_skip_blanks() {
        let lines: Vec<_> = significant_lines("a: 1\n\n   \r\n  b: 2  ").collect();
        assert_eq!(lines, vec!["a: 1", "b: 2"]);
    }
}
