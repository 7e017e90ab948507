//! FitTrack - Local-First Fitness Tracking Core
//!
//! The data and logic layer of a fitness tracker: a local user registry with
//! login/signup, an append-and-delete workout log, and pure statistics
//! functions (totals, streaks, weekly/monthly counts, per-date series).
//! Everything persists to a local key-value store as JSON; there is no
//! backend and no network.

pub mod app;
pub mod auth;
pub mod stats;
pub mod storage;
pub mod workouts;

mod ids;

// Re-export commonly used types
pub use app::FitnessApp;
pub use auth::types::User;
pub use stats::{StatsSummary, StreakSummary};
pub use storage::{FileBackend, MemoryBackend, StorageBackend, Store};
pub use workouts::types::{Workout, WorkoutDraft, WorkoutType};
