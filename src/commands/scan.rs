//! Raw scanner command
//!
//! Lists every candidate the scanner finds, dictionary-free. Useful for
//! checking what the engine sees before any policy filtering.

use crate::core::{Direction, Grid, WordCandidate};
use crate::engine::scan_grid;

/// Candidate listing with per-direction counts
pub struct ScanReport {
    pub candidates: Vec<WordCandidate>,
    pub rightward: usize,
    pub leftward: usize,
    pub downward: usize,
    pub upward: usize,
}

impl ScanReport {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.rightward + self.leftward + self.downward + self.upward
    }
}

/// Scan a grid and tally candidates by direction
///
/// # Panics
///
/// Panics if `min_len` is zero.
#[must_use]
pub fn scan_report(grid: &Grid, min_len: usize) -> ScanReport {
    let candidates = scan_grid(grid, min_len);

    let mut report = ScanReport {
        candidates: Vec::new(),
        rightward: 0,
        leftward: 0,
        downward: 0,
        upward: 0,
    };

    for candidate in &candidates {
        match candidate.direction {
            Direction::Right => report.rightward += 1,
            Direction::Left => report.leftward += 1,
            Direction::Down => report.downward += 1,
            Direction::Up => report.upward += 1,
        }
    }

    report.candidates = candidates;
    report
}
