//! Workout types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    Running,
    Cycling,
    Swimming,
    #[serde(rename = "Weight Training")]
    WeightTraining,
    Yoga,
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutType::Running => write!(f, "Running"),
            WorkoutType::Cycling => write!(f, "Cycling"),
            WorkoutType::Swimming => write!(f, "Swimming"),
            WorkoutType::WeightTraining => write!(f, "Weight Training"),
            WorkoutType::Yoga => write!(f, "Yoga"),
        }
    }
}

/// A logged workout. Records are created once and deleted by id; there is
/// no in-place update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Timestamp-derived identifier
    pub id: String,
    /// Free-form title, e.g. "Morning Run"
    pub title: String,
    /// Kind of workout
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Duration in minutes
    pub duration: u32,
    /// Calories burned
    pub calories: u32,
    /// Calendar date of the workout
    pub date: NaiveDate,
    /// Weight in kilograms, present only for weight training
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Input for a new workout, before validation and id assignment.
#[derive(Debug, Clone)]
pub struct WorkoutDraft {
    pub title: String,
    pub workout_type: WorkoutType,
    /// Duration in minutes
    pub duration: u32,
    /// Calories burned
    pub calories: u32,
    pub date: NaiveDate,
    /// Weight in kilograms, required when the type is weight training
    pub weight: Option<f64>,
}
