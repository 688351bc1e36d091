//! Difficulty scaling.
//!
//! The tick interval shrinks by [`INTERVAL_STEP_MS`] each time the score
//! crosses a multiple of [`SPEEDUP_EVERY`], and never goes below
//! [`MIN_INTERVAL_MS`].

use crate::types::{INTERVAL_STEP_MS, MIN_INTERVAL_MS, SPEEDUP_EVERY, START_INTERVAL_MS};

/// Interval after the score moved from `prev_score` to `score`.
///
/// # Examples
///
/// ```
/// use tui_snake_core::difficulty::interval_after_score;
///
/// assert_eq!(interval_after_score(140, 40, 50), 130);
/// assert_eq!(interval_after_score(130, 50, 60), 130);
/// ```
pub fn interval_after_score(interval_ms: u32, prev_score: u32, score: u32) -> u32 {
    let crossed = (score / SPEEDUP_EVERY).saturating_sub(prev_score / SPEEDUP_EVERY);
    interval_ms
        .saturating_sub(crossed.saturating_mul(INTERVAL_STEP_MS))
        .max(MIN_INTERVAL_MS)
}

/// Interval of a run that reached `score` from zero.
pub fn interval_for_score(score: u32) -> u32 {
    interval_after_score(START_INTERVAL_MS, 0, score)
}
