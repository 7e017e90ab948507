//! Consecutive-day streak calculation.

use chrono::NaiveDate;

/// Current and longest consecutive-day streaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakSummary {
    /// Days in the streak ending today or yesterday, 0 if broken
    pub current: u32,
    /// Longest consecutive-day run anywhere in the history
    pub longest: u32,
}

/// Compute streaks from workout dates.
///
/// Dates are deduplicated first: several workouts on one day count as a
/// single day. The current streak is anchored at the most recent distinct
/// date and is 0 when that date is more than one day before `today`; the
/// longest streak is the best run over the whole history regardless of
/// when it happened.
pub fn streaks(dates: &[NaiveDate], today: NaiveDate) -> StreakSummary {
    let mut days = dates.to_vec();
    days.sort_unstable();
    days.dedup();

    if days.is_empty() {
        return StreakSummary::default();
    }

    let mut longest = 1u32;
    let mut run = 1u32;
    for pair in days.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    let last = days[days.len() - 1];
    let current = if (today - last).num_days() > 1 {
        // Gap of two or more days to today: the streak is broken.
        0
    } else {
        let mut count = 1u32;
        for pair in days.windows(2).rev() {
            if (pair[1] - pair[0]).num_days() == 1 {
                count += 1;
            } else {
                break;
            }
        }
        count
    };

    StreakSummary { current, longest }
}
