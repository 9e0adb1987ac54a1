//! Candidate acceptance and score computation
//!
//! Turns scanner candidates into scored words under a policy. Everything
//! here is a pure function of (grid snapshot, dictionary, policy): no
//! shared state, no I/O, safe to call concurrently.

use super::policy::{DedupeMode, ScoreConvention, ScorePolicy};
use super::scanner::scan_grid;
use crate::core::{Coord, Direction, Grid, WordCandidate};
use crate::dictionary::Dictionary;
use rustc_hash::FxHashSet;
use std::fmt;

/// A candidate that passed the acceptance test
///
/// `points` is the word's sum-of-lengths contribution; under the
/// unique-cells convention it is kept as a display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordHit {
    pub text: String,
    pub path: Vec<Coord>,
    pub direction: Direction,
    pub points: u32,
}

impl WordHit {
    fn from_candidate(candidate: WordCandidate) -> Self {
        let points = candidate.text.len() as u32;
        Self {
            text: candidate.text,
            path: candidate.path,
            direction: candidate.direction,
            points,
        }
    }

    /// First cell in reading order
    ///
    /// # Panics
    /// Panics if the hit is empty (the scorer never emits one).
    #[must_use]
    pub fn start(&self) -> Coord {
        self.path[0]
    }
}

impl fmt::Display for WordHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (+{})",
            self.text,
            self.direction.arrow(),
            self.start(),
            self.points
        )
    }
}

/// Result of scoring one grid snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub total: u32,
    pub hits: Vec<WordHit>,
}

impl ScoreOutcome {
    /// Distinct cells covered by at least one hit
    #[must_use]
    pub fn covered_cells(&self) -> FxHashSet<Coord> {
        self.hits
            .iter()
            .flat_map(|h| h.path.iter().copied())
            .collect()
    }
}

/// The acceptance test for a single candidate text
///
/// Rejects texts below the minimum length or containing a cooldown letter.
/// Dictionary filtering applies only when enabled *and* the dictionary is
/// healthy: an unhealthy (too small to trust) dictionary triggers the
/// autoguard and accepts everything length-qualifying, so a broken or
/// not-yet-loaded dictionary never silently zero-scores a legitimate game.
#[must_use]
pub fn accepts(policy: &ScorePolicy, dictionary: &Dictionary, text: &str) -> bool {
    if text.len() < policy.min_len {
        return false;
    }
    if policy.on_cooldown(text) {
        return false;
    }
    if policy.use_dictionary && dictionary.healthy() && !dictionary.contains(text) {
        return false;
    }
    true
}

/// Scan a grid and score it in one call
///
/// Pure function of its inputs; calling it twice yields identical results.
///
/// # Panics
/// Panics if `policy.min_len` is zero.
///
/// # Examples
/// ```
/// use wordgrid::core::Grid;
/// use wordgrid::dictionary::Dictionary;
/// use wordgrid::engine::{ScorePolicy, score};
///
/// let grid = Grid::from_rows(&["CAT", "...", "..."]).unwrap();
/// let dictionary = Dictionary::trusted(["CAT", "AT"]);
/// let outcome = score(&grid, &dictionary, &ScorePolicy::default());
///
/// assert_eq!(outcome.total, 5); // CAT (3) + AT (2)
/// assert_eq!(outcome.hits.len(), 2);
/// ```
#[must_use]
pub fn score(grid: &Grid, dictionary: &Dictionary, policy: &ScorePolicy) -> ScoreOutcome {
    score_candidates(scan_grid(grid, policy.min_len), dictionary, policy)
}

/// Filter already-scanned candidates into hits and total them
///
/// Candidates are processed in the order given; under per-text dedupe the
/// first occurrence of each text wins, so scan order decides which position
/// is credited.
#[must_use]
pub fn score_candidates(
    candidates: Vec<WordCandidate>,
    dictionary: &Dictionary,
    policy: &ScorePolicy,
) -> ScoreOutcome {
    let mut hits = Vec::new();
    let mut seen_texts: FxHashSet<String> = FxHashSet::default();

    for candidate in candidates {
        if !accepts(policy, dictionary, &candidate.text) {
            continue;
        }
        if policy.dedupe == DedupeMode::PerText && !seen_texts.insert(candidate.text.clone()) {
            continue;
        }
        hits.push(WordHit::from_candidate(candidate));
    }

    let total = match policy.convention {
        ScoreConvention::SumOfLengths => hits.iter().map(|h| h.points).sum(),
        ScoreConvention::UniqueCells => {
            let cells: FxHashSet<Coord> = hits
                .iter()
                .flat_map(|h| h.path.iter().copied())
                .collect();
            cells.len() as u32
        }
    };

    ScoreOutcome { total, hits }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::policy::{DedupeMode, ScoreConvention};

    fn cat_grid() -> Grid {
        Grid::from_rows(&["CAT", "...", "..."]).unwrap()
    }

    #[test]
    fn cat_row_scores_seven() {
        // The pinned scenario: dictionary {CAT, AT, CA}, per-occurrence,
        // sum-of-lengths. Reverse readings AC/TA/TAC are not in the
        // dictionary, so exactly CA, CAT and AT score.
        let dictionary = Dictionary::trusted(["CAT", "AT", "CA"]);
        let outcome = score(&cat_grid(), &dictionary, &ScorePolicy::default());

        let texts: Vec<&str> = outcome.hits.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, ["CA", "CAT", "AT"]);
        assert_eq!(outcome.total, 7);
    }

    #[test]
    fn empty_grid_scores_zero() {
        let dictionary = Dictionary::trusted(["CAT"]);
        let outcome = score(&Grid::new(4, 4), &dictionary, &ScorePolicy::default());
        assert_eq!(outcome.total, 0);
        assert!(outcome.hits.is_empty());
    }

    #[test]
    fn unhealthy_dictionary_triggers_autoguard() {
        // Dictionary filtering is on, but the dictionary is too small to
        // trust: every length-qualifying candidate must be accepted.
        let dictionary = Dictionary::from_words::<_, &str>([]);
        assert!(!dictionary.healthy());

        let outcome = score(&cat_grid(), &dictionary, &ScorePolicy::default());
        assert_eq!(outcome.hits.len(), 6); // CA CAT AT AC TAC TA
        assert_eq!(outcome.total, 14);
    }

    #[test]
    fn dictionary_off_accepts_everything() {
        let dictionary = Dictionary::trusted(["CAT"]);
        let policy = ScorePolicy {
            use_dictionary: false,
            ..ScorePolicy::default()
        };
        let outcome = score(&cat_grid(), &dictionary, &policy);
        assert_eq!(outcome.hits.len(), 6);
    }

    #[test]
    fn scoring_is_idempotent() {
        let dictionary = Dictionary::trusted(["CAT", "AT", "CA", "TA"]);
        let policy = ScorePolicy::default();
        let first = score(&cat_grid(), &dictionary, &policy);
        let second = score(&cat_grid(), &dictionary, &policy);
        assert_eq!(first, second);
    }

    #[test]
    fn per_occurrence_counts_repeats() {
        let grid = Grid::from_rows(&["CAT", "...", "CAT"]).unwrap();
        let dictionary = Dictionary::trusted(["CAT"]);
        let outcome = score(&grid, &dictionary, &ScorePolicy::default());

        assert_eq!(outcome.hits.len(), 2);
        assert_eq!(outcome.total, 6);
        assert_ne!(outcome.hits[0].start(), outcome.hits[1].start());
    }

    #[test]
    fn per_text_dedupe_keeps_first_occurrence() {
        let grid = Grid::from_rows(&["CAT", "...", "CAT"]).unwrap();
        let dictionary = Dictionary::trusted(["CAT", "AT"]);
        let policy = ScorePolicy {
            dedupe: DedupeMode::PerText,
            ..ScorePolicy::default()
        };
        let outcome = score(&grid, &dictionary, &policy);

        let texts: Vec<&str> = outcome.hits.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, ["CAT", "AT"]);
        // First occurrence in scan order is the row-0 one.
        assert_eq!(outcome.hits[0].start(), Coord::new(0, 0));
        assert_eq!(outcome.total, 5);
    }

    #[test]
    fn unique_cells_counts_coverage_not_repeats() {
        let dictionary = Dictionary::trusted(["CAT", "AT", "CA"]);
        let policy = ScorePolicy {
            convention: ScoreConvention::UniqueCells,
            ..ScorePolicy::default()
        };
        let outcome = score(&cat_grid(), &dictionary, &policy);

        // Three hits all overlap within the same three cells.
        assert_eq!(outcome.hits.len(), 3);
        assert_eq!(outcome.total, 3);
    }

    #[test]
    fn cooldown_letters_invalidate_words() {
        let dictionary = Dictionary::trusted(["CAT", "AT", "CA"]);
        let policy = ScorePolicy::default().with_cooldown(b"T");
        let outcome = score(&cat_grid(), &dictionary, &policy);

        let texts: Vec<&str> = outcome.hits.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, ["CA"]);
        assert_eq!(outcome.total, 2);
    }

    #[test]
    fn accepts_rechecks_length_as_definitive_gate() {
        let dictionary = Dictionary::trusted(["CAT"]);
        let policy = ScorePolicy::default().with_min_len(4);
        assert!(!accepts(&policy, &dictionary, "CAT"));

        // Even with the scanner bypassed entirely.
        let stray = WordCandidate::new(
            "AT".to_string(),
            vec![Coord::new(0, 0), Coord::new(0, 1)],
            Direction::Right,
        );
        let outcome = score_candidates(vec![stray], &dictionary, &policy);
        assert!(outcome.hits.is_empty());
    }

    #[test]
    fn dictionary_lookup_is_case_normalized() {
        let dictionary = Dictionary::trusted(["cat"]);
        let policy = ScorePolicy::default();
        assert!(accepts(&policy, &dictionary, "CAT"));
    }

    #[test]
    fn covered_cells_union_of_paths() {
        let dictionary = Dictionary::trusted(["CAT", "AT"]);
        let outcome = score(&cat_grid(), &dictionary, &ScorePolicy::default());
        let cells = outcome.covered_cells();
        assert_eq!(cells.len(), 3);
        assert!(cells.contains(&Coord::new(0, 0)));
        assert!(cells.contains(&Coord::new(0, 2)));
    }
}
