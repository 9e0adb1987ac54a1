//! Reading directions for grid scanning
//!
//! A word occurrence is tagged with one of four directions: the two scan axes
//! (rows and columns), each traversed forward and backward. Identical text
//! read in different directions is never the same occurrence.

use std::fmt;

/// One of the four axis/direction combinations a word can be read in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along a row, left to right
    Right,
    /// Along a row, right to left
    Left,
    /// Down a column, top to bottom
    Down,
    /// Up a column, bottom to top
    Up,
}

impl Direction {
    /// All four directions in scan order
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Down, Self::Up];

    /// Whether this direction runs along a row
    #[inline]
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Right | Self::Left)
    }

    /// Whether this direction reads a run backward (against scan order)
    #[inline]
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::Left | Self::Up)
    }

    /// The forward direction for the same axis
    #[must_use]
    pub const fn forward_axis(self) -> Self {
        match self {
            Self::Right | Self::Left => Self::Right,
            Self::Down | Self::Up => Self::Down,
        }
    }

    /// Arrow glyph for terminal display
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Right => '→',
            Self::Left => '←',
            Self::Down => '↓',
            Self::Up => '↑',
        }
    }

    /// Short lowercase label, used in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Down => "down",
            Self::Up => "up",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_and_vertical_split() {
        assert!(Direction::Right.is_horizontal());
        assert!(Direction::Left.is_horizontal());
        assert!(!Direction::Down.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
    }

    #[test]
    fn reverse_directions() {
        assert!(!Direction::Right.is_reverse());
        assert!(Direction::Left.is_reverse());
        assert!(!Direction::Down.is_reverse());
        assert!(Direction::Up.is_reverse());
    }

    #[test]
    fn forward_axis_collapses_reverse() {
        assert_eq!(Direction::Left.forward_axis(), Direction::Right);
        assert_eq!(Direction::Up.forward_axis(), Direction::Down);
        assert_eq!(Direction::Right.forward_axis(), Direction::Right);
        assert_eq!(Direction::Down.forward_axis(), Direction::Down);
    }

    #[test]
    fn all_covers_every_direction() {
        assert_eq!(Direction::ALL.len(), 4);
        for dir in Direction::ALL {
            assert!(Direction::ALL.contains(&dir));
        }
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(format!("{}", Direction::Right), "right");
        assert_eq!(format!("{}", Direction::Up), "up");
    }
}
