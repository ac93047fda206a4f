use wanderlust_config::SessionConfig;
use wanderlust_core::{Activity, Category};
use wanderlust_error::{SessionErrorKind, WanderlustErrorKind};
use wanderlust_session::{Achievement, Session};

fn activity(title: &str, difficulty: &str, category: Category) -> Activity {
    Activity::new(title, "desc", "1 hour", difficulty, category)
}

#[test]
fn test_new_session_starts_empty() {
    let session = Session::from(&SessionConfig::default());
    assert_eq!(session.username(), "Wanderer");
    assert_eq!(*session.points(), 0);
    assert_eq!(session.completed_count(), 0);
    assert!(session.achievements().is_empty());
}

#[test]
fn test_points_accumulate() {
    let mut session = Session::default();
    session.complete(activity("a", "Hard", Category::Adventure));
    session.complete(activity("b", "Medium", Category::Culture));
    session.complete(activity("c", "Missing", Category::Food));
    assert_eq!(*session.points(), 45);
    assert_eq!(session.completed_count(), 3);
}

#[test]
fn test_mumbai_foodie_unlocks_on_fifth_food_activity() {
    let mut session = Session::default();
    for i in 0..4 {
        let completion = session.complete(activity(&format!("food {i}"), "Easy", Category::Food));
        assert!(completion.unlocked().is_empty());
    }
    session.complete(activity("museum", "Easy", Category::Culture));
    assert!(!session.has(Achievement::MumbaiFoodie));

    let completion = session.complete(activity("food 5", "Easy", Category::Food));
    assert_eq!(completion.unlocked(), &vec![Achievement::MumbaiFoodie]);
    assert!(session.has(Achievement::MumbaiFoodie));

    let again = session.complete(activity("food 6", "Easy", Category::Food));
    assert!(again.unlocked().is_empty());
    assert_eq!(session.achievements().len(), 1);
}

#[test]
fn test_one_completion_can_unlock_both() {
    let mut session = Session::default();
    for i in 0..4 {
        session.complete(activity(&format!("food {i}"), "Easy", Category::Food));
    }
    session.complete(activity("hard 1", "Hard", Category::Adventure));
    session.complete(activity("hard 2", "HARD", Category::Culture));

    let completion = session.complete(activity("hard food", "hard", Category::Food));
    assert_eq!(*completion.points_gained(), 20);
    assert_eq!(
        completion.unlocked(),
        &vec![Achievement::MumbaiFoodie, Achievement::UrbanExplorer]
    );
}

#[test]
fn test_save_does_not_award_points() {
    let mut session = Session::default();
    session.save(activity("later", "Hard", Category::Adventure));
    assert_eq!(*session.points(), 0);
    assert_eq!(session.saved().len(), 1);
    assert_eq!(session.completed_count(), 0);
}

#[test]
fn test_rename_rejects_blank_names() {
    let mut session = Session::default();
    session.rename("  Priya ").unwrap();
    assert_eq!(session.username(), "Priya");

    let err = session.rename("   ").unwrap_err();
    match err.kind() {
        WanderlustErrorKind::Session(e) => assert_eq!(e.kind, SessionErrorKind::EmptyUsername),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(session.username(), "Priya");
}

#[test]
fn test_session_serializes_for_display() {
    let mut session = Session::new("Asha");
    session.complete(activity("a", "Hard", Category::Food));
    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["username"], "Asha");
    assert_eq!(json["points"], 20);
    assert_eq!(json["completed"][0]["category"], "Food");
}
