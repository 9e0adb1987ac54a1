//! Benchmark command
//!
//! Scores batches of randomly generated grids, first serially and then in
//! parallel with rayon, and reports hit statistics and throughput for both
//! passes.

use crate::core::Grid;
use crate::dictionary::Dictionary;
use crate::engine::{ScorePolicy, score};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Parameters for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub grids: usize,
    pub rows: usize,
    pub cols: usize,
    /// Probability that a cell holds a letter, clamped to `0.0..=1.0`
    pub density: f64,
    /// Fixed RNG seed; `None` seeds from the OS for a fresh run
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            grids: 200,
            rows: 10,
            cols: 10,
            density: 0.6,
            seed: None,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_grids: usize,
    pub cells_per_grid: usize,
    pub total_hits: usize,
    pub total_points: u64,
    pub min_hits: usize,
    pub max_hits: usize,
    pub average_hits: f64,
    pub serial_duration: Duration,
    pub parallel_duration: Duration,
    pub serial_grids_per_second: f64,
    pub parallel_grids_per_second: f64,
    /// Point total from the parallel pass; must equal `total_points`
    /// because scoring is a pure function of grid, dictionary, and policy
    pub parallel_points: u64,
}

impl BenchmarkResult {
    /// Serial wall time divided by parallel wall time
    #[must_use]
    pub fn speedup(&self) -> f64 {
        self.serial_duration.as_secs_f64() / self.parallel_duration.as_secs_f64().max(1e-6)
    }
}

/// Generate random grids to score
///
/// A seeded config produces the same grids on every call, so timed runs
/// stay comparable across machines and invocations.
#[must_use]
pub fn generate_grids(config: &BenchmarkConfig) -> Vec<Grid> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let density = config.density.clamp(0.0, 1.0);

    (0..config.grids)
        .map(|_| {
            let mut grid = Grid::new(config.rows, config.cols);
            for row in 0..config.rows {
                for col in 0..config.cols {
                    if rng.random_bool(density) {
                        let letter = b'A' + rng.random_range(0..26u8);
                        grid.set_letter(row, col, Some(letter));
                    }
                }
            }
            grid
        })
        .collect()
}

/// Score every grid serially, then score them all again in parallel
///
/// Both passes see identical inputs, so their point totals must agree; the
/// parallel total is kept on the result so callers can check that the runs
/// matched.
///
/// # Panics
///
/// Panics if the progress bar template fails to parse (it is a fixed
/// string, so this does not happen in practice).
#[must_use]
pub fn run_benchmark(
    grids: &[Grid],
    dictionary: &Dictionary,
    policy: &ScorePolicy,
) -> BenchmarkResult {
    let pb = ProgressBar::new(grids.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let serial_start = Instant::now();
    let mut total_hits = 0usize;
    let mut total_points = 0u64;
    let mut min_hits = usize::MAX;
    let mut max_hits = 0usize;

    for (idx, grid) in grids.iter().enumerate() {
        let outcome = score(grid, dictionary, policy);
        total_hits += outcome.hits.len();
        total_points += u64::from(outcome.total);
        min_hits = min_hits.min(outcome.hits.len());
        max_hits = max_hits.max(outcome.hits.len());

        if idx % 10 == 0 {
            pb.set_message(format!("{total_hits} hits"));
        }
        pb.inc(1);
    }

    let serial_duration = serial_start.elapsed();
    pb.finish_with_message(format!("{total_hits} hits"));

    let parallel_start = Instant::now();
    let parallel_points: u64 = grids
        .par_iter()
        .map(|grid| u64::from(score(grid, dictionary, policy).total))
        .sum();
    let parallel_duration = parallel_start.elapsed();

    let total_grids = grids.len();
    BenchmarkResult {
        total_grids,
        cells_per_grid: grids.first().map_or(0, |g| g.rows() * g.cols()),
        total_hits,
        total_points,
        min_hits: if total_grids == 0 { 0 } else { min_hits },
        max_hits,
        average_hits: if total_grids == 0 {
            0.0
        } else {
            total_hits as f64 / total_grids as f64
        },
        serial_duration,
        parallel_duration,
        serial_grids_per_second: total_grids as f64 / serial_duration.as_secs_f64().max(1e-6),
        parallel_grids_per_second: total_grids as f64 / parallel_duration.as_secs_f64().max(1e-6),
        parallel_points,
    }
}
