//! Headless match runner for cubic chess
//!
//! This crate provides infrastructure for:
//! - Running random-vs-random (or any `Engine`) matches without a UI
//! - Scoring games by king capture, with a move cap as the draw rule
//! - Saving match reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Twenty games between two seeded random engines
//! cargo run -p arena -- random:1 random:2 --games 20
//!
//! # Load the match setup from a TOML file and save a report
//! cargo run -p arena -- --config match.toml --out report.json
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
