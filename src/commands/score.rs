//! Grid scoring command
//!
//! Reads a grid from a file, scores it against the curated dictionary and
//! packages the result for display.

use crate::core::Grid;
use crate::dictionary::Dictionary;
use crate::engine::{ScoreOutcome, ScorePolicy, score};
use std::fs;
use std::path::Path;

/// Everything the score command prints
pub struct ScoreReport {
    pub grid: Grid,
    pub outcome: ScoreOutcome,
    pub dictionary_size: usize,
    pub dictionary_healthy: bool,
    /// Whether the policy asked for dictionary filtering
    pub filter_requested: bool,
    /// False when filtering is off or the autoguard kicked in
    pub filtering_active: bool,
}

/// Parse a grid file: one row per line, `.`/`_`/space for empty cells
///
/// Blank lines are skipped so trailing newlines and spacer lines are
/// harmless.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is empty, or does not
/// parse as a rectangular grid.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid, String> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
    parse_grid(&content)
}

/// Parse grid text, one row per non-blank line
///
/// # Errors
///
/// Returns an error for an empty input or a malformed grid.
pub fn parse_grid(content: &str) -> Result<Grid, String> {
    let rows: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    if rows.is_empty() {
        return Err("Grid file contains no rows".to_string());
    }

    Grid::from_rows(&rows).map_err(|e| format!("Invalid grid: {e}"))
}

/// Score an already-parsed grid
#[must_use]
pub fn build_report(grid: Grid, dictionary: &Dictionary, policy: &ScorePolicy) -> ScoreReport {
    let outcome = score(&grid, dictionary, policy);
    ScoreReport {
        grid,
        outcome,
        dictionary_size: dictionary.len(),
        dictionary_healthy: dictionary.healthy(),
        filter_requested: policy.use_dictionary,
        filtering_active: policy.use_dictionary && dictionary.healthy(),
    }
}

/// Load a grid file and score it
///
/// # Errors
///
/// Returns an error if the grid file cannot be read or parsed.
pub fn score_file<P: AsRef<Path>>(
    path: P,
    dictionary: &Dictionary,
    policy: &ScorePolicy,
) -> Result<ScoreReport, String> {
    let grid = load_grid(path)?;
    Ok(build_report(grid, dictionary, policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_grid_reads_rows_and_blanks() {
        let grid = parse_grid("CAT\n...\nD_G\n").unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.letter(0, 0), Some(b'C'));
        assert_eq!(grid.letter(1, 1), None);
        assert_eq!(grid.letter(2, 1), None);
        assert_eq!(grid.letter(2, 2), Some(b'G'));
    }

    #[test]
    fn parse_grid_skips_blank_lines() {
        let grid = parse_grid("\nCAT\n\nDOG\n\n").unwrap();
        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn parse_grid_rejects_empty_input() {
        assert!(parse_grid("").is_err());
        assert!(parse_grid("\n  \n").is_err());
    }

    #[test]
    fn parse_grid_rejects_ragged_rows() {
        let err = parse_grid("CAT\nDO").unwrap_err();
        assert!(err.contains("Invalid grid"));
    }

    #[test]
    fn load_grid_reports_missing_file() {
        let err = load_grid("/no/such/grid.txt").unwrap_err();
        assert!(err.contains("Cannot read"));
    }

    #[test]
    fn report_flags_autoguard() {
        let grid = parse_grid("CAT").unwrap();
        let thin = Dictionary::from_words(["CAT"]);
        let report = build_report(grid, &thin, &ScorePolicy::default());

        assert!(!report.dictionary_healthy);
        assert!(!report.filtering_active);
        // Autoguard accepts every candidate.
        assert_eq!(report.outcome.hits.len(), 6);
    }

    #[test]
    fn report_totals_match_engine() {
        let grid = parse_grid("CAT\n...\n...").unwrap();
        let dictionary = Dictionary::trusted(["CAT", "AT", "CA"]);
        let report = build_report(grid, &dictionary, &ScorePolicy::default());

        assert!(report.filtering_active);
        assert_eq!(report.outcome.total, 7);
        assert_eq!(report.dictionary_size, 3);
    }
}
