//! Scoring module - score, level and gravity speed policy
//!
//! Pure functions only. Level is always recomputed from the cumulative line
//! count, never incremented on its own, so it cannot drift from `lines`.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Running score/level state after a lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_MS,
        }
    }
}

/// Points for clearing `cleared` rows with a single lock.
/// Anything outside 0..=4 scores nothing.
pub fn line_clear_score(cleared: usize) -> u32 {
    LINE_SCORES.get(cleared).copied().unwrap_or(0)
}

/// Level reached after `total_lines` cleared lines (starts at 1).
pub fn level_for_lines(total_lines: u32) -> u32 {
    (total_lines / LINES_PER_LEVEL + 1).max(1)
}

/// Gravity interval for a level, in milliseconds, floored at 100ms.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Fold one lock that cleared `cleared` rows into `progress`.
pub fn apply_lock(progress: Progress, cleared: usize) -> Progress {
    let score = progress.score.saturating_add(line_clear_score(cleared));
    let lines = progress.lines.saturating_add(cleared as u32);
    let level = level_for_lines(lines);
    Progress {
        score,
        lines,
        level,
        drop_interval_ms: drop_interval_ms(level),
    }
}
