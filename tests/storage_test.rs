//! Unit tests for storage backends and the typed store.

use chrono::NaiveDate;
use fittrack::storage::keys;
use fittrack::storage::StorageError;
use fittrack::{FileBackend, MemoryBackend, StorageBackend, Store, Workout, WorkoutType};
use tempfile::TempDir;

#[test]
fn test_memory_backend_roundtrip() {
    let mut backend = MemoryBackend::new();

    assert!(backend.get("workouts").unwrap().is_none());

    backend.set("workouts", "[]").unwrap();
    assert_eq!(backend.get("workouts").unwrap().as_deref(), Some("[]"));

    backend.remove("workouts").unwrap();
    assert!(backend.get("workouts").unwrap().is_none());
}

#[test]
fn test_file_backend_writes_one_file_per_key() {
    let dir = TempDir::new().unwrap();
    let mut backend = FileBackend::open(dir.path()).unwrap();

    backend.set("users", "[]").unwrap();
    assert!(dir.path().join("users.json").exists());

    backend.remove("users").unwrap();
    assert!(!dir.path().join("users.json").exists());

    // Removing an absent key is fine.
    backend.remove("users").unwrap();
}

#[test]
fn test_file_backend_persists_across_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut backend = FileBackend::open(dir.path()).unwrap();
        backend.set("currentUser", "{\"id\":\"1\"}").unwrap();
    }

    let backend = FileBackend::open(dir.path()).unwrap();
    assert_eq!(
        backend.get("currentUser").unwrap().as_deref(),
        Some("{\"id\":\"1\"}")
    );
}

#[test]
fn test_store_treats_absent_keys_as_empty() {
    let store = Store::new(MemoryBackend::new());

    assert!(store.users().unwrap().is_empty());
    assert!(store.workouts().unwrap().is_empty());
    assert!(store.current_user().unwrap().is_none());
}

#[test]
fn test_store_surfaces_malformed_json_as_parse_error() {
    let mut backend = MemoryBackend::new();
    backend.set(keys::USERS, "not json").unwrap();

    let store = Store::new(backend);
    let err = store.users().unwrap_err();
    assert!(matches!(err, StorageError::Parse(_)));
}

#[test]
fn test_workout_wire_format() {
    let workout = Workout {
        id: "1700000000000".to_string(),
        title: "Deadlifts".to_string(),
        workout_type: WorkoutType::WeightTraining,
        duration: 45,
        calories: 320,
        date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
        weight: Some(80.0),
    };

    let json = serde_json::to_value(&workout).unwrap();
    assert_eq!(json["type"], "Weight Training");
    assert_eq!(json["date"], "2024-01-04");
    assert_eq!(json["weight"], 80.0);

    // Weight is omitted entirely when absent.
    let run = Workout {
        workout_type: WorkoutType::Running,
        weight: None,
        ..workout
    };
    let json = serde_json::to_value(&run).unwrap();
    assert_eq!(json["type"], "Running");
    assert!(json.get("weight").is_none());
}

#[test]
fn test_store_roundtrips_workouts_through_file_backend() {
    let dir = TempDir::new().unwrap();

    let workout = Workout {
        id: "1".to_string(),
        title: "Laps".to_string(),
        workout_type: WorkoutType::Swimming,
        duration: 40,
        calories: 400,
        date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
        weight: None,
    };

    {
        let mut store = Store::new(FileBackend::open(dir.path()).unwrap());
        store.save_workouts(std::slice::from_ref(&workout)).unwrap();
    }

    let store = Store::new(FileBackend::open(dir.path()).unwrap());
    assert_eq!(store.workouts().unwrap(), vec![workout]);
}
