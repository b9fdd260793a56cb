//! Tournament Runner for checkers engines
//!
//! This crate provides infrastructure for:
//! - Running complete games between two engines without any front end
//! - Saving match results as JSON and printing reports
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tournament -- --engine1 heuristic --engine2 random --games 100
//! ```

mod match_runner;
mod results;

#[cfg(test)]
mod match_runner_tests;

pub use match_runner::*;
pub use results::*;
