//! Grid scanning: run extraction and candidate enumeration
//!
//! The scanner is a pure enumerator. It knows nothing about dictionaries or
//! scoring; it reports every contiguous sub-run of letters of a minimum
//! length, along both axes, read forward and backward, exactly once per
//! (start, end, direction) triple.

use crate::core::{Coord, Direction, Grid, WordCandidate};

/// Enumerate every word candidate on the grid
///
/// Scan order is deterministic: row lines top to bottom, then column lines
/// left to right. Within each maximal letter run, all forward sub-ranges in
/// (start, end) order come first, then the same sub-ranges read in reverse.
/// For a run of length n this yields O(n²) candidates per direction, which
/// is fine at board sizes (runs are bounded by board width/height).
///
/// # Panics
/// Panics if `min_len` is zero; that is a caller bug, not a game state.
///
/// # Examples
/// ```
/// use wordgrid::core::{Direction, Grid};
/// use wordgrid::engine::scan_grid;
///
/// let grid = Grid::from_rows(&["CAT", "...", "..."]).unwrap();
/// let candidates = scan_grid(&grid, 2);
///
/// let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
/// assert_eq!(texts, vec!["CA", "CAT", "AT", "AC", "TAC", "TA"]);
/// assert!(candidates.iter().any(|c| c.direction == Direction::Left));
/// ```
#[must_use]
pub fn scan_grid(grid: &Grid, min_len: usize) -> Vec<WordCandidate> {
    assert!(min_len >= 1, "minimum word length must be at least 1");

    let mut candidates = Vec::new();

    for row in 0..grid.rows() {
        let line: Vec<(Coord, Option<u8>)> = grid.row_line(row).collect();
        scan_line(&line, Direction::Right, Direction::Left, min_len, &mut candidates);
    }
    for col in 0..grid.cols() {
        let line: Vec<(Coord, Option<u8>)> = grid.col_line(col).collect();
        scan_line(&line, Direction::Down, Direction::Up, min_len, &mut candidates);
    }

    candidates
}

/// Split one scan line into maximal letter runs and emit their sub-ranges
fn scan_line(
    line: &[(Coord, Option<u8>)],
    forward: Direction,
    reverse: Direction,
    min_len: usize,
    out: &mut Vec<WordCandidate>,
) {
    for run in letter_runs(line) {
        // Fast path; the scorer re-checks length as the definitive gate.
        if run.len() < min_len {
            continue;
        }

        for start in 0..run.len() {
            for end in (start + min_len)..=run.len() {
                out.push(make_candidate(&run[start..end], forward, false));
            }
        }
        for start in 0..run.len() {
            for end in (start + min_len)..=run.len() {
                out.push(make_candidate(&run[start..end], reverse, true));
            }
        }
    }
}

/// Maximal contiguous letter runs along one line, in line order
fn letter_runs(line: &[(Coord, Option<u8>)]) -> Vec<Vec<(Coord, u8)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(Coord, u8)> = Vec::new();

    for &(coord, cell) in line {
        match cell {
            Some(letter) => current.push((coord, letter)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

fn make_candidate(cells: &[(Coord, u8)], direction: Direction, reversed: bool) -> WordCandidate {
    let (text, path): (String, Vec<Coord>) = if reversed {
        (
            cells.iter().rev().map(|&(_, b)| b as char).collect(),
            cells.iter().rev().map(|&(c, _)| c).collect(),
        )
    } else {
        (
            cells.iter().map(|&(_, b)| b as char).collect(),
            cells.iter().map(|&(c, _)| c).collect(),
        )
    };
    WordCandidate::new(text, path, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts_of(candidates: &[WordCandidate], direction: Direction) -> Vec<String> {
        candidates
            .iter()
            .filter(|c| c.direction == direction)
            .map(|c| c.text.clone())
            .collect()
    }

    #[test]
    fn blank_grid_yields_nothing() {
        let grid = Grid::new(5, 5);
        assert!(scan_grid(&grid, 2).is_empty());
    }

    #[test]
    fn zero_size_grid_yields_nothing() {
        let grid = Grid::new(0, 0);
        assert!(scan_grid(&grid, 2).is_empty());
    }

    #[test]
    fn single_row_run_yields_all_subranges_both_ways() {
        let grid = Grid::from_rows(&["CAT"]).unwrap();
        let candidates = scan_grid(&grid, 2);

        assert_eq!(texts_of(&candidates, Direction::Right), ["CA", "CAT", "AT"]);
        assert_eq!(texts_of(&candidates, Direction::Left), ["AC", "TAC", "TA"]);
        // Columns are all length-1 runs, below min_len
        assert!(texts_of(&candidates, Direction::Down).is_empty());
        assert!(texts_of(&candidates, Direction::Up).is_empty());
    }

    #[test]
    fn min_len_filters_short_subranges() {
        let grid = Grid::from_rows(&["CAT"]).unwrap();
        let candidates = scan_grid(&grid, 3);

        let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["CAT", "TAC"]);
    }

    #[test]
    fn empties_split_runs() {
        let grid = Grid::from_rows(&["AB.CD"]).unwrap();
        let candidates = scan_grid(&grid, 2);

        let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["AB", "BA", "CD", "DC"]);
    }

    #[test]
    fn columns_scanned_down_and_up() {
        let grid = Grid::from_rows(&["C", "A", "T"]).unwrap();
        let candidates = scan_grid(&grid, 2);

        assert_eq!(texts_of(&candidates, Direction::Down), ["CA", "CAT", "AT"]);
        assert_eq!(texts_of(&candidates, Direction::Up), ["AC", "TAC", "TA"]);
    }

    #[test]
    fn reversed_path_matches_reading_order() {
        let grid = Grid::from_rows(&["CAT"]).unwrap();
        let candidates = scan_grid(&grid, 3);

        let tac = candidates
            .iter()
            .find(|c| c.direction == Direction::Left)
            .unwrap();
        assert_eq!(tac.text, "TAC");
        assert_eq!(
            tac.path,
            vec![Coord::new(0, 2), Coord::new(0, 1), Coord::new(0, 0)]
        );
    }

    #[test]
    fn paths_are_contiguous_and_in_bounds() {
        let grid = Grid::from_rows(&["DOG.", "O..A", "GOAT"]).unwrap();
        let candidates = scan_grid(&grid, 2);
        assert!(!candidates.is_empty());

        for c in &candidates {
            assert_eq!(c.text.len(), c.path.len());
            for coord in &c.path {
                assert!(grid.in_bounds(*coord));
            }
            for pair in c.path.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                match c.direction {
                    Direction::Right => {
                        assert_eq!(a.row, b.row);
                        assert_eq!(a.col + 1, b.col);
                    }
                    Direction::Left => {
                        assert_eq!(a.row, b.row);
                        assert_eq!(a.col, b.col + 1);
                    }
                    Direction::Down => {
                        assert_eq!(a.col, b.col);
                        assert_eq!(a.row + 1, b.row);
                    }
                    Direction::Up => {
                        assert_eq!(a.col, b.col);
                        assert_eq!(a.row, b.row + 1);
                    }
                }
            }
        }
    }

    #[test]
    fn occurrences_are_positionally_distinct() {
        // Same text "AB" appears in two rows; both are reported.
        let grid = Grid::from_rows(&["AB", "AB"]).unwrap();
        let candidates = scan_grid(&grid, 2);

        let abs: Vec<&WordCandidate> = candidates
            .iter()
            .filter(|c| c.text == "AB" && c.direction == Direction::Right)
            .collect();
        assert_eq!(abs.len(), 2);
        assert_ne!(abs[0].start(), abs[1].start());

        // And the vertical runs contribute their own candidates.
        assert!(candidates.iter().any(|c| c.text == "AA"));
        assert!(candidates.iter().any(|c| c.text == "BB"));
    }

    #[test]
    fn candidate_count_matches_closed_form() {
        // Run of n letters, min m: (n-m+1)(n-m+2)/2 sub-ranges per direction.
        let grid = Grid::from_rows(&["ABCDE"]).unwrap();
        let candidates = scan_grid(&grid, 2);
        // n=5, m=2: 4*5/2 = 10 per direction, 20 total.
        assert_eq!(candidates.len(), 20);
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn zero_min_len_panics() {
        let grid = Grid::new(1, 1);
        let _ = scan_grid(&grid, 0);
    }

    #[test]
    fn scan_is_deterministic() {
        let grid = Grid::from_rows(&["TOP.", "O.AT", "WINS"]).unwrap();
        assert_eq!(scan_grid(&grid, 2), scan_grid(&grid, 2));
    }
}
