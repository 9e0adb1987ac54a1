//! Scoring policy configuration
//!
//! An immutable value describing which candidates count as words and how
//! accepted words turn into points. Policy knobs directly set game balance,
//! so one policy should be chosen per game session and not changed mid-game.

use rustc_hash::FxHashSet;

/// How repeated word text is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupeMode {
    /// Every distinct (text, position, direction) occurrence scores.
    /// Default for free play: the same word spelled twice scores twice.
    #[default]
    PerOccurrence,
    /// Only the first occurrence of each distinct text scores; repeats
    /// anywhere on the board are ignored, even in other directions.
    PerText,
}

impl DedupeMode {
    /// Create from a name string
    ///
    /// Supported: "per-occurrence", "occurrence", "per-text", "text".
    /// Defaults to `PerOccurrence` if unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "per-text" | "text" => Self::PerText,
            _ => Self::PerOccurrence,
        }
    }
}

/// How accepted words convert into a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreConvention {
    /// Total = sum of accepted word lengths; a word kept twice counts twice
    #[default]
    SumOfLengths,
    /// Total = number of distinct cells covered by at least one accepted
    /// word. Rewards board coverage and is immune to overlap inflation.
    UniqueCells,
}

impl ScoreConvention {
    /// Create from a name string
    ///
    /// Supported: "sum-lengths", "lengths", "unique-cells", "cells".
    /// Defaults to `SumOfLengths` if unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "unique-cells" | "cells" => Self::UniqueCells,
            _ => Self::SumOfLengths,
        }
    }
}

/// Acceptance and scoring configuration
///
/// `cooldown` holds letters temporarily barred from scoring: when set, any
/// candidate containing one of them is rejected. The set comes from external
/// turn-management state; `None` disables the check entirely.
#[derive(Debug, Clone)]
pub struct ScorePolicy {
    /// Minimum accepted word length (must be >= 1; normally 2 or 3)
    pub min_len: usize,
    /// Whether candidates must exist in the curated dictionary
    pub use_dictionary: bool,
    pub dedupe: DedupeMode,
    pub convention: ScoreConvention,
    pub cooldown: Option<FxHashSet<u8>>,
}

impl ScorePolicy {
    /// Builder-style minimum length override
    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Builder-style cooldown set from letter bytes
    ///
    /// Letters are normalized to uppercase; an empty slice yields no
    /// cooldown check at all.
    #[must_use]
    pub fn with_cooldown(mut self, letters: &[u8]) -> Self {
        if letters.is_empty() {
            self.cooldown = None;
        } else {
            self.cooldown = Some(letters.iter().map(u8::to_ascii_uppercase).collect());
        }
        self
    }

    /// Whether a candidate text trips the cooldown exclusion
    #[must_use]
    pub fn on_cooldown(&self, text: &str) -> bool {
        match &self.cooldown {
            Some(set) => text.bytes().any(|b| set.contains(&b)),
            None => false,
        }
    }
}

impl Default for ScorePolicy {
    /// Free-play defaults: length 2+, dictionary filtering on,
    /// per-occurrence dedupe, sum-of-lengths scoring, no cooldown
    fn default() -> Self {
        Self {
            min_len: 2,
            use_dictionary: true,
            dedupe: DedupeMode::PerOccurrence,
            convention: ScoreConvention::SumOfLengths,
            cooldown: None,
        }
    }
}
