//! Timestamp-derived record identifiers.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generate a millisecond-timestamp id, strictly increasing within the
/// process so records created in the same millisecond stay distinct.
pub fn timestamp_id() -> String {
    let now = Utc::now().timestamp_millis();
    let prev = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(last.max(now - 1) + 1)
        })
        .unwrap_or(now);

    (prev.max(now - 1) + 1).to_string()
}
