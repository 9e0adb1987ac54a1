//! Word candidates extracted from grid scan lines

use super::{Coord, Direction};
use std::fmt;

/// A contiguous sub-run of letters read in one direction
///
/// Carries the text in reading order, the ordered coordinates it occupies
/// (matching the reading order), and the direction tag. Two candidates with
/// identical text are still distinct occurrences when their span or
/// direction differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCandidate {
    pub text: String,
    pub path: Vec<Coord>,
    pub direction: Direction,
}

impl WordCandidate {
    #[must_use]
    pub fn new(text: String, path: Vec<Coord>, direction: Direction) -> Self {
        debug_assert_eq!(text.len(), path.len(), "text and path must align");
        Self {
            text,
            path,
            direction,
        }
    }

    /// Candidate length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// First cell in reading order
    ///
    /// # Panics
    /// Panics if the candidate is empty (the scanner never emits one).
    #[must_use]
    pub fn start(&self) -> Coord {
        self.path[0]
    }

    /// Last cell in reading order
    ///
    /// # Panics
    /// Panics if the candidate is empty (the scanner never emits one).
    #[must_use]
    pub fn end(&self) -> Coord {
        *self.path.last().expect("candidate has at least one cell")
    }
}

impl fmt::Display for WordCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}..{}",
            self.text,
            self.direction.arrow(),
            self.start(),
            self.end()
        )
    }
}
