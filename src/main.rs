//! Wordgrid - CLI
//!
//! Word discovery and scoring for letter-placement grid games: a playable
//! TUI board plus grid scoring, raw scanning, curation reports, and
//! throughput benchmarks.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordgrid::{
    commands::{
        BenchmarkConfig, generate_grids, load_grid, run_benchmark, run_curate, scan_report,
        score_file,
    },
    dictionary::{Curator, DictionaryCache, FileSource, WordSource},
    engine::{DedupeMode, ScoreConvention, ScorePolicy},
    interactive::{App, run_tui},
    output::{print_benchmark_result, print_curate_summary, print_scan_report, print_score_report},
};

#[derive(Parser)]
#[command(
    name = "wordgrid",
    about = "Word discovery and scoring for letter-placement grid games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file to curate into the dictionary (repeatable)
    #[arg(short = 'w', long = "wordlist", global = true)]
    wordlists: Vec<PathBuf>,

    /// File of words to always accept, bypassing the curation heuristics
    #[arg(long, global = true)]
    allow: Option<PathBuf>,

    /// File of words to always reject
    #[arg(long, global = true)]
    block: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive board game (default)
    Play {
        /// Board rows
        #[arg(long, default_value = "8")]
        rows: usize,

        /// Board columns
        #[arg(long, default_value = "8")]
        cols: usize,
    },

    /// Score a grid file against the curated dictionary
    Score {
        /// Grid file: one row per line, `.`/`_`/space for empty cells
        grid: PathBuf,

        /// Show every scored word with its cell path
        #[arg(short, long)]
        verbose: bool,

        /// Minimum word length to score
        #[arg(long, default_value = "2")]
        min_len: usize,

        /// Score without dictionary filtering
        #[arg(long)]
        no_dictionary: bool,

        /// Dedupe mode: occurrence (default) or text
        #[arg(long, default_value = "occurrence")]
        dedupe: String,

        /// Scoring convention: lengths (default) or cells
        #[arg(long, default_value = "lengths")]
        convention: String,

        /// Letters on cooldown; words containing one score nothing
        #[arg(long)]
        cooldown: Option<String>,
    },

    /// List every candidate the scanner sees, dictionary-free
    Scan {
        /// Grid file
        grid: PathBuf,

        /// Minimum candidate length
        #[arg(long, default_value = "2")]
        min_len: usize,
    },

    /// Run curation and report what was kept and rejected
    Curate {
        /// Number of curated words to print as a sample
        #[arg(long, default_value = "24")]
        sample: usize,
    },

    /// Benchmark scoring throughput on random grids
    Benchmark {
        /// Number of grids to score
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Grid rows
        #[arg(long, default_value = "10")]
        rows: usize,

        /// Grid columns
        #[arg(long, default_value = "10")]
        cols: usize,

        /// Probability that a cell holds a letter
        #[arg(long, default_value = "0.6")]
        density: f64,

        /// RNG seed for reproducible grids
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let curator = build_curator(cli.allow.as_deref(), cli.block.as_deref())?;
    let sources = wordlist_sources(&cli.wordlists);
    let cache = DictionaryCache::new(curator, sources);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { rows: 8, cols: 8 });

    match command {
        Commands::Play { rows, cols } => run_play_command(&cache, rows, cols),
        Commands::Score {
            grid,
            verbose,
            min_len,
            no_dictionary,
            dedupe,
            convention,
            cooldown,
        } => {
            let policy = build_policy(
                min_len,
                no_dictionary,
                &dedupe,
                &convention,
                cooldown.as_deref(),
            );
            run_score_command(&cache, &grid, &policy, verbose)
        }
        Commands::Scan { grid, min_len } => run_scan_command(&grid, min_len),
        Commands::Curate { sample } => {
            run_curate_command(&cache, sample);
            Ok(())
        }
        Commands::Benchmark {
            count,
            rows,
            cols,
            density,
            seed,
        } => {
            run_benchmark_command(&cache, count, rows, cols, density, seed);
            Ok(())
        }
    }
}

/// Build the curator from the optional allow/block list files
fn build_curator(allow: Option<&Path>, block: Option<&Path>) -> Result<Curator> {
    let allow_words = read_word_file(allow)?;
    let block_words = read_word_file(block)?;
    Ok(Curator::new(allow_words, block_words))
}

fn read_word_file(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn wordlist_sources(paths: &[PathBuf]) -> Vec<Box<dyn WordSource>> {
    paths
        .iter()
        .map(|path| Box::new(FileSource::new(path)) as Box<dyn WordSource>)
        .collect()
}

fn build_policy(
    min_len: usize,
    no_dictionary: bool,
    dedupe: &str,
    convention: &str,
    cooldown: Option<&str>,
) -> ScorePolicy {
    let mut policy = ScorePolicy::default().with_min_len(min_len.max(1));
    policy.use_dictionary = !no_dictionary;
    policy.dedupe = DedupeMode::from_name(dedupe);
    policy.convention = ScoreConvention::from_name(convention);
    if let Some(letters) = cooldown {
        policy = policy.with_cooldown(letters.as_bytes());
    }
    policy
}

fn run_play_command(cache: &DictionaryCache, rows: usize, cols: usize) -> Result<()> {
    let app = App::new(cache.dictionary(), rows.max(1), cols.max(1));
    run_tui(app)
}

fn run_score_command(
    cache: &DictionaryCache,
    grid_path: &Path,
    policy: &ScorePolicy,
    verbose: bool,
) -> Result<()> {
    let report =
        score_file(grid_path, cache.dictionary(), policy).map_err(|e| anyhow::anyhow!(e))?;
    print_score_report(&report, verbose);
    Ok(())
}

fn run_scan_command(grid_path: &Path, min_len: usize) -> Result<()> {
    let grid = load_grid(grid_path).map_err(|e| anyhow::anyhow!(e))?;
    let report = scan_report(&grid, min_len.max(1));
    print_scan_report(&report);
    Ok(())
}

fn run_curate_command(cache: &DictionaryCache, sample: usize) {
    let summary = run_curate(cache.curator(), cache.sources(), sample);
    print_curate_summary(&summary);
}

fn run_benchmark_command(
    cache: &DictionaryCache,
    count: usize,
    rows: usize,
    cols: usize,
    density: f64,
    seed: Option<u64>,
) {
    println!("Scoring {count} random {rows}x{cols} grids (density {density:.2})...");

    let config = BenchmarkConfig {
        grids: count,
        rows,
        cols,
        density,
        seed,
    };
    let grids = generate_grids(&config);
    let result = run_benchmark(&grids, cache.dictionary(), &ScorePolicy::default());
    print_benchmark_result(&result);
}
