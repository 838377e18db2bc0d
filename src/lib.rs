//! GoAT: Go board region analysis and scoring.
//!
//! This crate takes a finished Go board, splits it into regions of connected
//! stones and empty points, removes dead groups, and counts the result under
//! Japanese (territory) or Chinese (area) rules.
//!
//! ## Modules
//!
//! - [`grid`] - Square board of empty points and stones
//! - [`colors`] - Color↔value mapping and capture counters
//! - [`extract`] - Partition of the grid into connected regions
//! - [`merge`] - Joining of same-color regions that share a liberty
//! - [`graph`] - Adjacency graph over regions
//! - [`region`] - Region attributes (liberties, neighbors, liveness)
//! - [`board`] - Board state, dead-region clearing
//! - [`scoring`] - Japanese and Chinese scoring with komi
//! - [`loader`] - Text board format
//!
//! ## Example
//!
//! ```
//! use goat_rust::board::Board;
//! use goat_rust::loader::parse_board;
//! use goat_rust::scoring::{Score, ScoringSystem};
//!
//! let loaded = parse_board(
//!     ". X O .\n\
//!      . X O .\n\
//!      . X O .\n\
//!      . X O .",
//! )
//! .unwrap();
//! let mut board =
//!     Board::from_values(&loaded.values, &loaded.colors, &loaded.zero_captures()).unwrap();
//! board.clear_dead_regions();
//!
//! let scores = Score::new(ScoringSystem::Chinese, false)
//!     .score(&board, None)
//!     .unwrap();
//! assert_eq!(scores.to_string(), "Black: 8, White: 8");
//! ```

pub mod board;
pub mod colors;
pub mod constants;
pub mod error;
pub mod extract;
pub mod graph;
pub mod grid;
pub mod loader;
pub mod merge;
pub mod region;
pub mod scoring;
mod union_find;

pub use error::{ConfigError, Error, Result};
