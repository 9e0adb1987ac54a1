//! Formatting utilities for terminal output

use crate::core::Coord;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format cell coverage as a bar
#[must_use]
pub fn coverage_bar(covered: usize, total_cells: usize, width: usize) -> String {
    if total_cells == 0 {
        return create_progress_bar(0.0, 1.0, width);
    }
    create_progress_bar(covered as f64, total_cells as f64, width)
}

/// Render a word path as an arrow-joined coordinate chain
#[must_use]
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("→")
}
