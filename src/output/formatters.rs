//! Formatting utilities for terminal output

use crate::solver::SolutionList;

/// Header line above a solution list
#[must_use]
pub fn solutions_header(count: usize) -> String {
    format!("Valid words ({count}):")
}

/// Numbered lines, one per word, starting at 1
///
/// Numbers are right-aligned so the words line up.
#[must_use]
pub fn numbered_lines(solutions: &SolutionList) -> Vec<String> {
    let width = solutions.len().to_string().len();
    solutions
        .iter()
        .enumerate()
        .map(|(i, word)| format!("{:>width$}. {word}", i + 1))
        .collect()
}

/// Human-readable duration in the largest sensible unit
#[must_use]
pub fn format_duration_micros(micros: u128) -> String {
    if micros >= 1_000_000 {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    } else if micros >= 1_000 {
        format!("{:.2}ms", micros as f64 / 1_000.0)
    } else {
        format!("{micros}µs")
    }
}
