//! Display functions for command results

use super::formatters::{coverage_bar, format_path};
use crate::commands::{BenchmarkResult, CurateSummary, ScanReport, ScoreReport};
use crate::engine::WordHit;
use colored::Colorize;

/// Print a scored grid with totals and, optionally, every hit path
pub fn print_score_report(report: &ScoreReport, verbose: bool) {
    let grid = &report.grid;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scored {}x{} grid ({} letters placed)",
        grid.rows(),
        grid.cols(),
        grid.letter_count()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n{grid}");

    println!("\n📊 {}", "Result:".bright_cyan().bold());
    println!(
        "   Score:       {}",
        format!("{} points", report.outcome.total)
            .bright_yellow()
            .bold()
    );
    println!("   Words found: {}", report.outcome.hits.len());

    let covered = report.outcome.covered_cells().len();
    let cells = grid.rows() * grid.cols();
    println!(
        "   Coverage:    [{}] {covered}/{cells} cells",
        coverage_bar(covered, cells, 30).green()
    );

    if report.filtering_active {
        println!(
            "   Dictionary:  {}",
            format!("on ({} words)", report.dictionary_size).green()
        );
    } else if report.filter_requested {
        println!(
            "   Dictionary:  {}",
            "unhealthy, accepting all candidates".red().bold()
        );
    } else {
        println!("   Dictionary:  {}", "off".yellow());
    }

    if verbose {
        println!("\n📝 {}", "Words:".bright_cyan().bold());
        for hit in &report.outcome.hits {
            println!("   {hit}  {}", format_path(&hit.path).bright_black());
        }
    } else if !report.outcome.hits.is_empty() {
        let mut best: Vec<&WordHit> = report.outcome.hits.iter().collect();
        best.sort_by_key(|hit| std::cmp::Reverse(hit.points));

        println!("\n✨ {}", "Best words:".bright_cyan().bold());
        for hit in best.iter().take(5) {
            println!("   {hit}");
        }
    }
}

/// Print raw scanner output: per-direction tallies plus every candidate
pub fn print_scan_report(report: &ScanReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCANNER OUTPUT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Candidates by direction:".bright_cyan().bold());
    println!("   → rightward: {}", report.rightward);
    println!("   ← leftward:  {}", report.leftward);
    println!("   ↓ downward:  {}", report.downward);
    println!("   ↑ upward:    {}", report.upward);
    println!(
        "   Total:       {}",
        format!("{}", report.total()).bright_yellow().bold()
    );

    if !report.candidates.is_empty() {
        println!("\n📝 {}", "Candidates:".bright_cyan().bold());
        for candidate in &report.candidates {
            println!("   {candidate}");
        }
    }
}

/// Print a curation run: sources, acceptance, rejection breakdown, health
#[allow(clippy::too_many_lines)] // Comprehensive output formatting
pub fn print_curate_summary(summary: &CurateSummary) {
    let report = &summary.report;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CURATION REPORT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Sources:".bright_cyan().bold());
    if report.sources.is_empty() {
        println!("   (none configured)");
    }
    for source in &report.sources {
        match &source.error {
            Some(error) => println!("   {} {}", source.label, format!("failed: {error}").red()),
            None => println!("   {} ({} lines)", source.label, source.lines),
        }
    }

    println!("\n📊 {}", "Candidates:".bright_cyan().bold());
    println!("   Judged:     {}", report.candidates);
    if report.candidates > 0 {
        let pct = report.accepted as f64 / report.candidates as f64 * 100.0;
        println!(
            "   Accepted:   {} {}",
            report.accepted,
            format!("({pct:.1}%)").green()
        );
    } else {
        println!("   Accepted:   {}", report.accepted);
    }
    println!(
        "   Injected:   {} (two-letter whitelist)",
        report.whitelist_injected
    );

    let tally = report.rejections;
    if tally.total() > 0 {
        println!("\n📉 {}", "Rejections:".bright_cyan().bold());
        let rows = [
            ("malformed", tally.malformed),
            ("blocked", tally.blocked),
            ("abbreviation", tally.abbreviation),
            ("corporate suffix", tally.corporate_suffix),
            ("junk", tally.junk),
            ("unlisted 2-letter", tally.unlisted_two_letter),
            ("no vowel", tally.no_vowel),
        ];
        let max_count = rows.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);

        for (label, count) in rows {
            if count == 0 {
                continue;
            }
            let bar_len = (count * 30 / max_count).max(1);
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).red(),
                "░".repeat(30_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("   {label:<18} {bar} {count:5}");
        }
    }

    println!("\n📖 {}", "Dictionary:".bright_cyan().bold());
    println!(
        "   Size:   {}",
        format!("{} words", summary.dictionary_size)
            .bright_yellow()
            .bold()
    );
    if summary.healthy {
        println!("   Health: {}", "healthy, filtering enabled".green());
    } else {
        println!(
            "   Health: {}",
            "unhealthy, scoring will accept all candidates".red().bold()
        );
    }
    if report.used_seed_fallback {
        println!(
            "   {}",
            "No usable sources; fell back to the embedded seed list".yellow()
        );
    }

    if !summary.sample.is_empty() {
        println!("\n📝 {}", "Sample:".bright_cyan().bold());
        for chunk in summary.sample.chunks(8) {
            println!("   {}", chunk.join(" "));
        }
    }
}

/// Print benchmark timings for the serial and parallel passes
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Workload:".bright_cyan().bold());
    println!("   Grids scored:     {}", result.total_grids);
    println!("   Cells per grid:   {}", result.cells_per_grid);
    println!("   Words found:      {}", result.total_hits);
    println!(
        "   Points awarded:   {}",
        format!("{}", result.total_points).bright_yellow().bold()
    );
    println!(
        "   Hits per grid:    {} (min {}, max {})",
        format!("{:.1}", result.average_hits).bright_yellow(),
        result.min_hits,
        result.max_hits
    );

    println!("\n⚡ {}", "Throughput:".bright_cyan().bold());
    println!(
        "   Serial:           {:.2}s ({:.1} grids/s)",
        result.serial_duration.as_secs_f64(),
        result.serial_grids_per_second
    );
    println!(
        "   Parallel:         {:.2}s ({:.1} grids/s)",
        result.parallel_duration.as_secs_f64(),
        result.parallel_grids_per_second
    );

    let speedup = result.speedup();
    let speedup_str = format!("{speedup:.2}x");
    let colored_speedup = if speedup >= 2.0 {
        speedup_str.bright_green().bold()
    } else if speedup >= 1.0 {
        speedup_str.green()
    } else {
        speedup_str.yellow()
    };
    println!("   Speedup:          {colored_speedup}");

    if result.parallel_points == result.total_points {
        println!(
            "   Totals:           {}",
            "serial and parallel passes agree".green()
        );
    } else {
        println!(
            "   Totals:           {}",
            format!(
                "MISMATCH (serial {}, parallel {})",
                result.total_points, result.parallel_points
            )
            .red()
            .bold()
        );
    }
}
