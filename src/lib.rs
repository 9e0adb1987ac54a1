//! Wordgrid
//!
//! Word discovery and scoring engine for letter-placement grid games: scans
//! a board in all four reading directions, filters candidates through a
//! curated dictionary, and turns the survivors into points.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgrid::core::Grid;
//! use wordgrid::dictionary::Dictionary;
//! use wordgrid::engine::{ScorePolicy, score};
//!
//! // A 1x3 board spelling CAT
//! let grid = Grid::from_rows(&["CAT"]).unwrap();
//! let dictionary = Dictionary::trusted(["CAT", "AT"]);
//!
//! let outcome = score(&grid, &dictionary, &ScorePolicy::default());
//! assert_eq!(outcome.total, 5);
//! assert_eq!(outcome.hits.len(), 2);
//! ```

// Core domain types
pub mod core;

// Scanning, policy, and scoring
pub mod engine;

// Dictionary curation
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
