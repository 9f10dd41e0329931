//! Formatting utilities for terminal output

use crate::core::{Clue, Feedback, Word};
use colored::{ColoredString, Colorize};
use indicatif::ProgressStyle;

/// Guess letters on coloured tiles, e.g. ` C  R  A  N  E `
#[must_use]
pub fn colored_row(word: &Word, feedback: &Feedback) -> String {
    feedback
        .tiles()
        .iter()
        .zip(word.text().chars())
        .map(|(tile, ch)| tile_cell(ch, tile.clue).to_string())
        .collect()
}

fn tile_cell(ch: char, clue: Clue) -> ColoredString {
    let cell = format!(" {} ", ch.to_ascii_uppercase()).black().bold();
    match clue {
        Clue::Correct => cell.on_green(),
        Clue::Present => cell.on_yellow(),
        Clue::Absent => cell.on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width] before the cast
    let filled = ((value / max) * width as f64).clamp(0.0, width as f64) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Style for the batch progress bar
#[must_use]
pub fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"))
}
