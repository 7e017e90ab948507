//! Integration tests for the application facade: auth, logging, stats,
//! and session rehydration across restarts.

use chrono::NaiveDate;
use fittrack::auth::registry::AuthError;
use fittrack::{FileBackend, FitnessApp, MemoryBackend, WorkoutDraft, WorkoutType};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn app() -> FitnessApp<MemoryBackend> {
    FitnessApp::with_backend(MemoryBackend::new()).unwrap()
}

fn draft(title: &str, calories: u32, on: NaiveDate) -> WorkoutDraft {
    WorkoutDraft {
        title: title.to_string(),
        workout_type: WorkoutType::Running,
        duration: 30,
        calories,
        date: on,
        weight: None,
    }
}

#[test]
fn test_signup_logs_in_immediately() {
    let mut app = app();
    assert!(app.current_user().is_none());

    let user = app.signup("Alice", "alice@example.com", "secret").unwrap();
    assert_eq!(app.current_user(), Some(&user));
}

#[test]
fn test_logout_then_login() {
    let mut app = app();
    app.signup("Alice", "alice@example.com", "secret").unwrap();

    app.logout().unwrap();
    assert!(app.current_user().is_none());

    let err = app.login("alice@example.com", "wrong").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(app.current_user().is_none());

    app.login("alice@example.com", "secret").unwrap();
    assert_eq!(app.current_user().map(|u| u.email.as_str()), Some("alice@example.com"));
}

#[test]
fn test_workout_flow_feeds_stats() {
    let mut app = app();
    app.signup("Alice", "alice@example.com", "secret").unwrap();

    app.add_workout(draft("Run 1", 300, date(2024, 1, 1))).unwrap();
    app.add_workout(draft("Run 2", 310, date(2024, 1, 2))).unwrap();
    let gap_day = app.add_workout(draft("Run 3", 290, date(2024, 1, 4))).unwrap();

    let stats = app.summary_at(date(2024, 1, 4)).unwrap();
    assert_eq!(stats.total_workouts, 3);
    assert_eq!(stats.total_calories, 900);
    assert_eq!(stats.total_minutes, 90);
    assert_eq!(stats.streak.current, 1);
    assert_eq!(stats.streak.longest, 2);

    assert!(app.delete_workout(&gap_day.id).unwrap());
    let stats = app.summary_at(date(2024, 1, 4)).unwrap();
    assert_eq!(stats.total_workouts, 2);
    assert_eq!(stats.streak.current, 0);
    assert_eq!(stats.streak.longest, 2);
}

#[test]
fn test_series_through_facade() {
    let mut app = app();
    app.add_workout(draft("Run", 300, date(2024, 1, 2))).unwrap();
    app.add_workout(draft("Run again", 200, date(2024, 1, 2))).unwrap();

    let mut yoga = draft("Stretch", 100, date(2024, 1, 1));
    yoga.workout_type = WorkoutType::Yoga;
    app.add_workout(yoga).unwrap();

    let totals = app.daily_totals().unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].date, date(2024, 1, 2));
    assert_eq!(totals[0].calories, 500);

    let counts = app.type_distribution().unwrap();
    assert_eq!(counts, vec![(WorkoutType::Running, 2), (WorkoutType::Yoga, 1)]);
}

#[test]
fn test_session_rehydrates_from_file_storage() {
    let dir = TempDir::new().unwrap();

    {
        let backend = FileBackend::open(dir.path()).unwrap();
        let mut app = FitnessApp::with_backend(backend).unwrap();
        app.signup("Alice", "alice@example.com", "secret").unwrap();
        app.add_workout(draft("Run", 300, date(2024, 1, 1))).unwrap();
    }

    let backend = FileBackend::open(dir.path()).unwrap();
    let app = FitnessApp::with_backend(backend).unwrap();

    assert_eq!(app.current_user().map(|u| u.email.as_str()), Some("alice@example.com"));
    assert_eq!(app.workouts().unwrap().len(), 1);
}

#[test]
fn test_logout_clears_persisted_session() {
    let dir = TempDir::new().unwrap();

    {
        let backend = FileBackend::open(dir.path()).unwrap();
        let mut app = FitnessApp::with_backend(backend).unwrap();
        app.signup("Alice", "alice@example.com", "secret").unwrap();
        app.logout().unwrap();
    }

    let backend = FileBackend::open(dir.path()).unwrap();
    let app = FitnessApp::with_backend(backend).unwrap();
    assert!(app.current_user().is_none());
}

#[test]
fn test_default_goal_settings() {
    let app = app();
    assert_eq!(app.config().goals.weekly_workouts, 7);
    assert_eq!(app.config().goals.monthly_workouts, 30);
    assert_eq!(app.config().goals.streak_days, 30);
}
