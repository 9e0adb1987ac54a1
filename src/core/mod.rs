//! Core domain types for the word grid
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure and directly testable.

mod candidate;
mod direction;
mod grid;

pub use candidate::WordCandidate;
pub use direction::Direction;
pub use grid::{Coord, Grid, GridError};
