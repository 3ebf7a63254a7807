//! Scoring module - line-clear points, level progression, fall speed
//!
//! All functions are pure and take their tables from [`GameConfig`](crate::GameConfig)
//! so alternate rule sets can be tested without touching session state.

use crate::types::LINE_BASE_POINTS;

/// Calculate the score increment for one lock
///
/// `lines` is clamped to 4 for the multiplier lookup. The result is
/// `floor(lines * 100 * multiplier[lines] * level)`.
pub fn calculate_line_score(lines: usize, level: u32, multipliers: &[f64; 5]) -> u32 {
    let lines = lines.min(4);
    if lines == 0 {
        return 0;
    }
    let points = lines as f64 * LINE_BASE_POINTS as f64 * multipliers[lines] * level as f64;
    // `as` saturates for values beyond u32.
    points.floor() as u32
}

/// Level after a score change
///
/// Scans thresholds from the highest down to index 1 and takes the first
/// `i` with `score >= thresholds[i]` above the current level. Advances at
/// most one step per call to the first qualifying threshold; never lowers
/// the level.
pub fn calculate_level(score: u32, level: u32, thresholds: &[u32]) -> u32 {
    for i in (1..thresholds.len()).rev() {
        let candidate = i as u32 + 1;
        if score >= thresholds[i] && level < candidate {
            return candidate;
        }
    }
    level
}

/// Fall interval for a level (in milliseconds)
///
/// Level 1 uses `speeds[0]`; levels past the table use the last entry.
pub fn get_fall_interval_ms(level: u32, speeds: &[u32]) -> u32 {
    let last = speeds.len().saturating_sub(1);
    let idx = (level.saturating_sub(1) as usize).min(last);
    speeds.get(idx).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LEVEL_SPEEDS_MS, LEVEL_THRESHOLDS, SCORE_MULTIPLIERS};

    #[test]
    fn test_line_scores_level_one() {
        assert_eq!(calculate_line_score(0, 1, &SCORE_MULTIPLIERS), 0);
        assert_eq!(calculate_line_score(1, 1, &SCORE_MULTIPLIERS), 100);
        assert_eq!(calculate_line_score(2, 1, &SCORE_MULTIPLIERS), 300);
        assert_eq!(calculate_line_score(3, 1, &SCORE_MULTIPLIERS), 600);
        assert_eq!(calculate_line_score(4, 1, &SCORE_MULTIPLIERS), 1200);
    }

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(calculate_line_score(1, 3, &SCORE_MULTIPLIERS), 300);
        assert_eq!(calculate_line_score(2, 3, &SCORE_MULTIPLIERS), 900);
        assert_eq!(calculate_line_score(4, 6, &SCORE_MULTIPLIERS), 7200);
    }

    #[test]
    fn test_line_count_clamped_to_four() {
        assert_eq!(
            calculate_line_score(6, 1, &SCORE_MULTIPLIERS),
            calculate_line_score(4, 1, &SCORE_MULTIPLIERS)
        );
    }

    #[test]
    fn test_fractional_points_floor() {
        let multipliers = [0.0, 1.0, 1.25, 2.0, 3.0];
        // 2 * 100 * 1.25 * 1 = 250
        assert_eq!(calculate_line_score(2, 1, &multipliers), 250);
        let multipliers = [0.0, 0.333, 1.5, 2.0, 3.0];
        // 1 * 100 * 0.333 = 33.3
        assert_eq!(calculate_line_score(1, 1, &multipliers), 33);
    }

    #[test]
    fn test_level_up_exactly_at_threshold() {
        assert_eq!(calculate_level(1000, 1, &LEVEL_THRESHOLDS), 2);
        assert_eq!(calculate_level(999, 1, &LEVEL_THRESHOLDS), 1);
    }

    #[test]
    fn test_level_jumps_to_highest_qualifying_threshold() {
        // One scan, highest threshold wins.
        assert_eq!(calculate_level(5000, 1, &LEVEL_THRESHOLDS), 4);
        assert_eq!(calculate_level(25000, 2, &LEVEL_THRESHOLDS), 6);
    }

    #[test]
    fn test_level_never_decreases() {
        assert_eq!(calculate_level(0, 4, &LEVEL_THRESHOLDS), 4);
        assert_eq!(calculate_level(1200, 3, &LEVEL_THRESHOLDS), 3);
    }

    #[test]
    fn test_level_capped_by_table() {
        assert_eq!(calculate_level(u32::MAX, 6, &LEVEL_THRESHOLDS), 6);
        assert_eq!(calculate_level(u32::MAX, 1, &[0]), 1);
    }

    #[test]
    fn test_fall_intervals() {
        assert_eq!(get_fall_interval_ms(1, &LEVEL_SPEEDS_MS), 500);
        assert_eq!(get_fall_interval_ms(2, &LEVEL_SPEEDS_MS), 400);
        assert_eq!(get_fall_interval_ms(6, &LEVEL_SPEEDS_MS), 100);
        assert_eq!(get_fall_interval_ms(9, &LEVEL_SPEEDS_MS), 100); // clamped
    }

    #[test]
    fn test_fall_interval_short_table() {
        assert_eq!(get_fall_interval_ms(1, &[250]), 250);
        assert_eq!(get_fall_interval_ms(4, &[250]), 250);
        assert_eq!(get_fall_interval_ms(1, &[]), 0);
    }
}
