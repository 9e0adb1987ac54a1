//! Command implementations

pub mod benchmark;
pub mod curate;
pub mod scan;
pub mod score;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, generate_grids, run_benchmark};
pub use curate::{CurateSummary, run_curate};
pub use scan::{ScanReport, scan_report};
pub use score::{ScoreReport, build_report, load_grid, parse_grid, score_file};
