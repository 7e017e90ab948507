//! Add and delete operations on the workout log.

use thiserror::Error;

use super::types::{Workout, WorkoutDraft, WorkoutType};
use crate::ids::timestamp_id;
use crate::storage::{StorageBackend, StorageError, Store};

/// Workout log errors. Messages are the inline strings the tracker form
/// displays.
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Weight is required for weight training")]
    MissingWeight,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Validate a draft, assign it an id, append it to the log, and persist
/// the full list.
pub fn add_workout<B: StorageBackend>(
    store: &mut Store<B>,
    draft: WorkoutDraft,
) -> Result<Workout, WorkoutError> {
    if draft.title.trim().is_empty() || draft.duration == 0 || draft.calories == 0 {
        return Err(WorkoutError::MissingFields);
    }
    if draft.workout_type == WorkoutType::WeightTraining && draft.weight.is_none() {
        return Err(WorkoutError::MissingWeight);
    }

    // Weight only applies to weight training; drop it for everything else.
    let weight = match draft.workout_type {
        WorkoutType::WeightTraining => draft.weight,
        _ => None,
    };

    let workout = Workout {
        id: timestamp_id(),
        title: draft.title,
        workout_type: draft.workout_type,
        duration: draft.duration,
        calories: draft.calories,
        date: draft.date,
        weight,
    };

    let mut workouts = store.workouts()?;
    workouts.push(workout.clone());
    store.save_workouts(&workouts)?;

    tracing::debug!(id = %workout.id, kind = %workout.workout_type, "Added workout");
    Ok(workout)
}

/// Remove the workout with the given id and persist the full list.
/// Returns `false` if no record matched.
pub fn delete_workout<B: StorageBackend>(
    store: &mut Store<B>,
    id: &str,
) -> Result<bool, WorkoutError> {
    let mut workouts = store.workouts()?;
    let before = workouts.len();

    workouts.retain(|w| w.id != id);

    if workouts.len() == before {
        return Ok(false);
    }

    store.save_workouts(&workouts)?;

    tracing::debug!(id, "Deleted workout");
    Ok(true)
}
