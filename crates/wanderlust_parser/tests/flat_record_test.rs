//! Behaviour of the flat `key: value` parser on model-shaped input.

use wanderlust_core::{ActivityRecord, Category};
use wanderlust_parser::{MISSING, apply_defaults, parse_activity, parse_flat_record};

#[test]
fn last_occurrence_of_a_key_wins() {
    let record = parse_flat_record("title: First\nTITLE: Second\ndescription: D\ntitle: Third");
    assert_eq!(record.len(), 2);
    assert_eq!(record.get("title"), Some("Third"));
    assert_eq!(record.get("description"), Some("D"));
}

#[test]
fn lines_without_separator_do_not_disturb_neighbours() {
    let with_noise = parse_flat_record(
        "Here you go:\ntitle: Sassoon Dock\n- a bullet\ntime_estimate: 1 hour\n```\ndifficulty: Medium",
    );
    let clean = parse_flat_record("title: Sassoon Dock\ntime_estimate: 1 hour\ndifficulty: Medium");
    assert_eq!(with_noise, clean);
}

#[test]
fn values_keep_inner_separators_and_are_not_coerced() {
    let record = parse_flat_record("time_estimate:  1: 30 hrs  \ndifficulty: 3");
    assert_eq!(record.get("time_estimate"), Some("1: 30 hrs"));
    assert_eq!(record.get("difficulty"), Some("3"));
}

#[test]
fn windows_line_endings_are_handled() {
    let record = parse_flat_record("title: Crawford Market\r\ndifficulty: Easy\r\n");
    assert_eq!(record.get("title"), Some("Crawford Market"));
    assert_eq!(record.get("difficulty"), Some("Easy"));
}

#[test]
fn activity_view_reports_absent_fields() {
    let record = parse_activity("title: Bhel puri\ndescription: Snack on Girgaum Chowpatty");
    assert_eq!(
        record,
        ActivityRecord {
            title: Some("Bhel puri".to_string()),
            description: Some("Snack on Girgaum Chowpatty".to_string()),
            time_estimate: None,
            difficulty: None,
        }
    );
}

#[test]
fn empty_input_defaults_every_required_field() {
    let activity = apply_defaults(parse_activity(""), Category::Culture);
    assert_eq!(activity.title(), MISSING);
    assert_eq!(activity.description(), MISSING);
    assert_eq!(activity.time_estimate(), MISSING);
    assert_eq!(activity.difficulty(), MISSING);
    assert_eq!(*activity.category(), Category::Culture);
}

#[test]
fn flat_record_round_trips_through_its_text_form() {
    let original = parse_flat_record(
        "Title: Marine Drive stroll\ndescription: Walk the Queen's Necklace at dusk\nmood: calm\n: stray",
    );
    let reparsed = parse_flat_record(&original.to_text());
    assert_eq!(reparsed, original);

    let activity = parse_activity("title: A\ndifficulty: Hard");
    assert_eq!(parse_activity(&activity.to_text()), activity);
}
