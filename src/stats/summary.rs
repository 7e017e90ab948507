//! Aggregate statistics for the dashboard and progress displays.

use chrono::{Datelike, Days, NaiveDate};

use super::streak::{streaks, StreakSummary};
use crate::workouts::types::Workout;

/// Aggregate metrics over the workout log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSummary {
    /// Total number of workouts
    pub total_workouts: usize,
    /// Sum of calories over all workouts
    pub total_calories: u32,
    /// Sum of duration minutes over all workouts
    pub total_minutes: u32,
    /// Workouts since the start of the current week (Sunday)
    pub weekly_workouts: usize,
    /// Workouts since the first of the current month
    pub monthly_workouts: usize,
    /// Consecutive-day streaks
    pub streak: StreakSummary,
}

/// Start of the week containing `today`; weeks start on Sunday.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today - Days::new(u64::from(today.weekday().num_days_from_sunday()))
}

/// First day of the month containing `today`.
pub fn month_start(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}

/// Derive the aggregate metrics from the workout log.
pub fn summary(workouts: &[Workout], today: NaiveDate) -> StatsSummary {
    let week = week_start(today);
    let month = month_start(today);

    let dates: Vec<NaiveDate> = workouts.iter().map(|w| w.date).collect();

    StatsSummary {
        total_workouts: workouts.len(),
        total_calories: workouts.iter().map(|w| w.calories).sum(),
        total_minutes: workouts.iter().map(|w| w.duration).sum(),
        weekly_workouts: workouts.iter().filter(|w| w.date >= week).count(),
        monthly_workouts: workouts.iter().filter(|w| w.date >= month).count(),
        streak: streaks(&dates, today),
    }
}
