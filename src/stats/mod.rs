//! Pure statistics over the workout log.
//!
//! Every function here takes the workout slice (and an explicit `today`
//! where the calendar matters) and derives values without touching storage
//! or the clock, so the same code serves every display that needs it.

pub mod series;
pub mod streak;
pub mod summary;

pub use series::{daily_totals, type_distribution, DailyTotal};
pub use streak::{streaks, StreakSummary};
pub use summary::{summary, StatsSummary};
