//! Per-date and per-type series for charts.

use chrono::NaiveDate;

use crate::workouts::types::{Workout, WorkoutType};

/// Calories and minutes summed for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub calories: u32,
    pub minutes: u32,
}

/// Group workouts by date and sum calories and minutes per date.
///
/// Dates appear in the order they are first seen in the log, not sorted,
/// matching how the charts consume them.
pub fn daily_totals(workouts: &[Workout]) -> Vec<DailyTotal> {
    let mut totals: Vec<DailyTotal> = Vec::new();

    for workout in workouts {
        match totals.iter_mut().find(|t| t.date == workout.date) {
            Some(total) => {
                total.calories += workout.calories;
                total.minutes += workout.duration;
            }
            None => totals.push(DailyTotal {
                date: workout.date,
                calories: workout.calories,
                minutes: workout.duration,
            }),
        }
    }

    totals
}

/// Count workouts per type, in the order types are first seen.
pub fn type_distribution(workouts: &[Workout]) -> Vec<(WorkoutType, usize)> {
    let mut counts: Vec<(WorkoutType, usize)> = Vec::new();

    for workout in workouts {
        match counts.iter_mut().find(|(t, _)| *t == workout.workout_type) {
            Some((_, count)) => *count += 1,
            None => counts.push((workout.workout_type, 1)),
        }
    }

    counts
}
