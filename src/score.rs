//! Scoring: line-clear points, level progression and the gravity curve

use serde::{Deserialize, Serialize};

/// Point values for the scoring rules.
///
/// Pluggable so a host can load its own values alongside its other settings;
/// the defaults follow the modern guideline table. Clearing more rows at
/// once must never pay less per row than clearing fewer, which
/// [`Score::with_table`] enforces at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreTable {
    /// Points for clearing 1-4 rows with one lock, before the level multiplier
    pub line_points: [u64; 4],
    /// Points per cell of hard-drop distance
    pub hard_drop_per_cell: u64,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            line_points: [100, 300, 500, 800],
            hard_drop_per_cell: 2,
        }
    }
}

/// Score tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    /// Current score
    pub points: u64,
    /// Total lines cleared
    pub lines: u32,
    /// Current level, starts at 1 and rises every 10 lines
    pub level: u32,
    table: ScoreTable,
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl Score {
    pub fn new() -> Self {
        Self::with_table(ScoreTable::default())
    }

    /// Create a score tracker with custom point values.
    ///
    /// # Panics
    ///
    /// Panics if the table's per-row average decreases as more rows are
    /// cleared at once; such a table would reward splitting clears apart.
    pub fn with_table(table: ScoreTable) -> Self {
        for rows in 2..=table.line_points.len() as u64 {
            let prev = table.line_points[rows as usize - 2];
            let cur = table.line_points[rows as usize - 1];
            assert!(
                cur * (rows - 1) >= prev * rows,
                "per-row score must not decrease with more simultaneous rows"
            );
        }
        Self {
            points: 0,
            lines: 0,
            level: 1,
            table,
        }
    }

    /// Add points for rows cleared by a single lock; returns the points gained
    pub fn add_clear(&mut self, rows_cleared: usize) -> u64 {
        if rows_cleared == 0 {
            return 0;
        }
        let base = self.table.line_points[rows_cleared.min(4) - 1];

        self.lines += rows_cleared as u32;
        self.level = self.lines / 10 + 1;

        let gained = base * self.level as u64;
        self.points += gained;
        gained
    }

    /// Add points for hard-drop distance
    pub fn add_hard_drop(&mut self, cells: u32) {
        self.points += cells as u64 * self.table.hard_drop_per_cell;
    }

    /// Seconds per row of gravity at the current level (guideline curve).
    ///
    /// The engine has no clock; this is for the host's pacing loop.
    pub fn fall_speed(&self) -> f64 {
        let level = self.level.min(20) as f64;
        (0.8 - ((level - 1.0) * 0.007)).powf(level - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_clear() {
        let mut score = Score::new();
        assert_eq!(score.add_clear(1), 100);
        assert_eq!(score.points, 100);
        assert_eq!(score.lines, 1);
    }

    #[test]
    fn test_quad_beats_four_singles() {
        let mut quad = Score::new();
        quad.add_clear(4);

        let mut singles = Score::new();
        for _ in 0..4 {
            singles.add_clear(1);
        }
        assert!(quad.points > singles.points);
    }

    #[test]
    fn test_level_multiplier() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.add_clear(1);
        }
        assert_eq!(score.level, 2);
        // Next clear pays out at the new level
        assert_eq!(score.add_clear(1), 200);
    }

    #[test]
    fn test_no_points_for_zero_rows() {
        let mut score = Score::new();
        assert_eq!(score.add_clear(0), 0);
        assert_eq!(score.points, 0);
        assert_eq!(score.lines, 0);
    }

    #[test]
    fn test_hard_drop_points() {
        let mut score = Score::new();
        score.add_hard_drop(20);
        assert_eq!(score.points, 40);
    }

    #[test]
    #[should_panic(expected = "per-row score")]
    fn test_rejects_decreasing_per_row_table() {
        // 150 for a double pays 75/row, worse than 100/row for a single
        Score::with_table(ScoreTable {
            line_points: [100, 150, 500, 800],
            hard_drop_per_cell: 2,
        });
    }

    #[test]
    fn test_fall_speed_shrinks_with_level() {
        let mut score = Score::new();
        let slow = score.fall_speed();
        for _ in 0..30 {
            score.add_clear(1);
        }
        assert!(score.fall_speed() < slow);
    }
}
