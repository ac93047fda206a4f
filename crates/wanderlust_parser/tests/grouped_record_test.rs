//! Behaviour of the grouped `<prefix><n>_<field>` parser.

use wanderlust_core::{ActivityRecord, QuestStep};
use wanderlust_parser::{
    parse_challenge_activities, parse_quest_steps, serialize_grouped, strip_markup,
};

fn step(title: Option<&str>, description: Option<&str>, time: Option<&str>) -> QuestStep {
    QuestStep {
        step_title: title.map(str::to_string),
        step_description: description.map(str::to_string),
        time_estimate: time.map(str::to_string),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn steps_split_on_ordinal_change() {
    let steps = parse_quest_steps("step1_title: A\nstep1_description: B\nstep2_title: C");
    assert_eq!(
        steps,
        vec![step(Some("A"), Some("B"), None), step(Some("C"), None, None)]
    );
}

#[test]
fn no_matching_lines_yields_empty_list() {
    init_tracing();
    assert!(parse_quest_steps("").is_empty());
    assert!(parse_quest_steps("Here is your quest!\ntitle: Not grouped").is_empty());
    assert!(parse_challenge_activities("step1_title: wrong family").is_empty());
}

#[test]
fn missing_digits_default_to_first_group() {
    let steps = parse_quest_steps("step_title: X");
    assert_eq!(steps, vec![step(Some("X"), None, None)]);
}

#[test]
fn groups_follow_order_of_appearance() {
    let activities =
        parse_challenge_activities("activity2_title: X\nactivity2_difficulty: Hard\nactivity1_title: Y");
    assert_eq!(
        activities,
        vec![
            ActivityRecord {
                title: Some("X".to_string()),
                difficulty: Some("Hard".to_string()),
                ..Default::default()
            },
            ActivityRecord {
                title: Some("Y".to_string()),
                ..Default::default()
            },
        ]
    );
}

#[test]
fn revisiting_an_ordinal_opens_another_record() {
    let steps = parse_quest_steps("step1_title: A\nstep2_title: B\nstep1_description: late");
    assert_eq!(
        steps,
        vec![
            step(Some("A"), None, None),
            step(Some("B"), None, None),
            step(None, Some("late"), None),
        ]
    );
}

#[test]
fn noisy_quest_answer_after_markup_cleanup() {
    init_tracing();
    let raw = r#"Here's a 3-step quest for you:

**Step1_Title**: "Chai at Stadium Restaurant"
**Step1_Description**: Start with cutting chai.
Step1_Time_Estimate: 20 min

Step2_Title: Browse Kitab Khana
step2_description: Pick a book about old Bombay.
step2_time_estimate: 40 min
step2_photo_tip: stand by the door

Step 3 - finish at Oval Maidan
step3_title: Oval Maidan cricket
"#;
    let steps = parse_quest_steps(&strip_markup(raw));
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0].step_title.as_deref(), Some("Chai at Stadium Restaurant"));
    assert_eq!(steps[0].time_estimate.as_deref(), Some("20 min"));
    assert_eq!(steps[1].step_description.as_deref(), Some("Pick a book about old Bombay."));
    assert_eq!(steps[2], step(Some("Oval Maidan cricket"), None, None));
}

#[test]
fn challenge_lines_mixed_with_other_keys() {
    let text = "challenge_name: Fort Sprint
activity1_title: Flora Fountain selfie
activity1_time_estimate: 10 min
activity1_difficulty: Easy
activity2_title: Bombay High Court facade
activity2_description: Spot the Gothic details.
activity2_difficulty: Medium";
    let activities = parse_challenge_activities(text);
    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].difficulty.as_deref(), Some("Easy"));
    assert!(activities[0].description.is_none());
    assert_eq!(activities[1].title.as_deref(), Some("Bombay High Court facade"));
}

#[test]
fn grouped_records_round_trip_through_serialization() {
    let steps = parse_quest_steps("step3_title: A\nstep3_time_estimate: 5 min\nstep1_description: B");
    assert_eq!(parse_quest_steps(&serialize_grouped(&steps)), steps);

    let activities = parse_challenge_activities(
        "activity1_title: X\nactivity1_difficulty: Hard\nactivity2_description: Y",
    );
    assert_eq!(
        parse_challenge_activities(&serialize_grouped(&activities)),
        activities
    );
}

#[test]
fn only_ascii_digits_number_a_group() {
    // Arabic-Indic two carries no ordinal, so the line falls back to group 1.
    let steps = parse_quest_steps("step2_title: A\nstep\u{0662}_description: B");
    assert_eq!(
        steps,
        vec![step(Some("A"), None, None), step(None, Some("B"), None)]
    );
}
