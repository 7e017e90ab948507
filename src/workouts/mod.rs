//! Workout log: types and add/delete operations.

pub mod log;
pub mod types;

pub use log::{add_workout, delete_workout, WorkoutError};
pub use types::{Workout, WorkoutDraft, WorkoutType};
