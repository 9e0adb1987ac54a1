//! Incremental score tracking between grid snapshots
//!
//! Play modes re-score the whole grid after every placement and derive
//! per-move feedback from the two totals rather than maintaining their own
//! running tally. These helpers define the two supported readings of "what
//! did that move earn".

use super::scorer::WordHit;
use rustc_hash::FxHashSet;

/// Points gained by a move, clamped at zero
///
/// A placement can lower the total (a cooldown letter landing inside an
/// existing word invalidates it). Game flows that only award gains use this
/// instead of a signed difference.
#[must_use]
#[inline]
pub const fn clamped_delta(before: u32, after: u32) -> u32 {
    after.saturating_sub(before)
}

/// Outcome of crediting a snapshot against a set of already-credited texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovelDelta {
    /// Sum of lengths of the newly credited texts
    pub points: u32,
    /// Texts credited by this snapshot, in scan order
    pub newly_credited: Vec<String>,
}

/// Credit each word text at most once per game
///
/// Returns the texts present in `hits` but absent from `credited`, each
/// listed once even if it occurs at several positions in this snapshot.
/// The caller owns the credited set and extends it with `newly_credited`
/// after applying the move, which keeps undo a matter of restoring an
/// earlier copy of the set.
#[must_use]
pub fn novel_word_delta(credited: &FxHashSet<String>, hits: &[WordHit]) -> NovelDelta {
    let mut newly_credited = Vec::new();
    let mut seen_this_call: FxHashSet<&str> = FxHashSet::default();
    let mut points = 0;

    for hit in hits {
        if credited.contains(&hit.text) || !seen_this_call.insert(&hit.text) {
            continue;
        }
        points += hit.text.len() as u32;
        newly_credited.push(hit.text.clone());
    }

    NovelDelta {
        points,
        newly_credited,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Direction};

    fn hit(text: &str, row: usize) -> WordHit {
        let path = (0..text.len()).map(|col| Coord::new(row, col)).collect();
        WordHit {
            text: text.to_string(),
            path,
            direction: Direction::Right,
            points: text.len() as u32,
        }
    }

    #[test]
    fn clamped_delta_reports_gains() {
        assert_eq!(clamped_delta(5, 9), 4);
    }

    #[test]
    fn clamped_delta_floors_losses_at_zero() {
        assert_eq!(clamped_delta(9, 5), 0);
        assert_eq!(clamped_delta(7, 7), 0);
    }

    #[test]
    fn novel_words_credited_once_per_game() {
        let mut credited = FxHashSet::default();
        let hits = [hit("CAT", 0), hit("AT", 0)];

        let first = novel_word_delta(&credited, &hits);
        assert_eq!(first.points, 5);
        assert_eq!(first.newly_credited, ["CAT", "AT"]);

        credited.extend(first.newly_credited);
        let second = novel_word_delta(&credited, &hits);
        assert_eq!(second.points, 0);
        assert!(second.newly_credited.is_empty());
    }

    #[test]
    fn repeated_text_in_one_snapshot_credits_once() {
        let credited = FxHashSet::default();
        let hits = [hit("CAT", 0), hit("CAT", 2)];

        let delta = novel_word_delta(&credited, &hits);
        assert_eq!(delta.points, 3);
        assert_eq!(delta.newly_credited, ["CAT"]);
    }

    #[test]
    fn only_unseen_texts_count() {
        let mut credited = FxHashSet::default();
        credited.insert("CAT".to_string());
        let hits = [hit("CAT", 0), hit("COT", 1)];

        let delta = novel_word_delta(&credited, &hits);
        assert_eq!(delta.points, 3);
        assert_eq!(delta.newly_credited, ["COT"]);
    }

    #[test]
    fn crediting_preserves_scan_order() {
        let credited = FxHashSet::default();
        let hits = [hit("BE", 0), hit("AXE", 1), hit("COG", 2)];

        let delta = novel_word_delta(&credited, &hits);
        assert_eq!(delta.newly_credited, ["BE", "AXE", "COG"]);
    }
}
