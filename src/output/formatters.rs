//! Formatting utilities for terminal output

use crate::core::Cell;

/// Join a path into `(r, c) → (r, c)` form
#[must_use]
pub fn format_path(path: &[Cell]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Position of each board cell within `path`, in row-major order
///
/// Cells off the path are `None`; cells on it hold their 1-based step.
#[must_use]
pub fn path_steps(size: usize, path: &[Cell]) -> Vec<Option<usize>> {
    let mut steps = vec![None; size * size];
    for (step, cell) in path.iter().enumerate() {
        if cell.row < size && cell.col < size {
            steps[cell.row * size + cell.col] = Some(step + 1);
        }
    }
    steps
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
