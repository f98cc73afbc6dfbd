//! Match runner for playing games between engines

use cube_core::{Color, Engine, GameState};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Load a match setup from a TOML file.
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 is black
                match self.play_game(engine2, engine1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                let score = format!("{}-{}-{}", result.wins, result.losses, result.draws);
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    outcome,
                    color,
                    score = %score,
                    "game finished"
                );
            }
        }

        result
    }

    /// Play a single game, returns result from white's perspective
    fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameResult {
        let mut game = GameState::new();
        white.new_game();
        black.new_game();

        for _ply in 0..self.config.max_moves {
            let side = game.current_turn();
            let mover: &mut dyn Engine = match side {
                Color::White => white,
                Color::Black => black,
            };

            let planned = match mover.choose_move(game.board(), side) {
                Some(mv) => mv,
                // The variant has no stalemate rule; an immobile side
                // just scores a draw here.
                None => return GameResult::Draw,
            };

            match game.try_move(planned.from, planned.to) {
                Ok(Some(victim)) => {
                    debug!(piece = %victim.kind, by = %side, at = %planned.to, "capture");
                }
                Ok(None) => {}
                Err(err) => {
                    // An engine proposing an illegal move forfeits the game.
                    warn!(%err, mv = %planned, engine = mover.name(), "illegal move, forfeiting");
                    return match side {
                        Color::White => GameResult::Loss,
                        Color::Black => GameResult::Win,
                    };
                }
            }

            if let Some(winner) = game.winner() {
                return match winner {
                    Color::White => GameResult::Win,
                    Color::Black => GameResult::Loss,
                };
            }
        }

        // Move cap reached
        GameResult::Draw
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}
