//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of a single game, from engine1's (or white's) perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete match report, savable as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub num_games: u32,
    pub max_moves: u32,
    pub result: MatchResult,
}

impl MatchReport {
    /// Save the report to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load a report from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} vs {}: {}-{}-{} (score {:.2})",
            self.engine1,
            self.engine2,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_from_engine1_perspective() {
        let result = MatchResult {
            wins: 3,
            losses: 1,
            draws: 2,
        };
        assert_eq!(result.total_games(), 6);
        assert!((result.score() - (4.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_match_scores_even() {
        assert_eq!(MatchResult::new().score(), 0.5);
    }
}
