//! Display functions for command results

use super::formatters::{format_duration_micros, numbered_lines, solutions_header};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::SolutionList;
use colored::Colorize;
use std::io::{self, Write};

/// Write a header plus a numbered solution list
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_solutions<W: Write>(out: &mut W, solutions: &SolutionList) -> io::Result<()> {
    writeln!(out, "{}\n", solutions_header(solutions.len()).bright_cyan().bold())?;
    for line in numbered_lines(solutions) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print the result of solving a puzzle
///
/// `plain` prints bare words, one per line, for piping into other tools.
///
/// # Errors
/// Returns any error from writing to stdout.
pub fn print_solve_result(result: &SolveResult, plain: bool) -> io::Result<()> {
    write_solve_result(&mut io::stdout().lock(), result, plain)
}

/// Write the result of solving a puzzle to `out`
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_solve_result<W: Write>(
    out: &mut W,
    result: &SolveResult,
    plain: bool,
) -> io::Result<()> {
    if plain {
        for word in &result.solutions {
            writeln!(out, "{word}")?;
        }
        return Ok(());
    }

    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Puzzle: {}   Center letter: {}",
        result.letters.bright_yellow().bold(),
        result.mandatory.to_uppercase().to_string().bright_green().bold()
    )?;
    writeln!(out, "{}\n", "─".repeat(60).cyan())?;

    write_solutions(out, &result.solutions)?;

    writeln!(
        out,
        "\n{}",
        format!(
            "Searched {} words in {}",
            result.dictionary_size,
            format_duration_micros(result.duration.as_micros())
        )
        .bright_black()
    )
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Workload:".bright_cyan().bold());
    println!("   Dictionary size:  {}", result.dictionary_size);
    println!("   Puzzles solved:   {}", result.puzzles);
    println!("   Seed:             {}", result.seed);
    println!(
        "   Avg solutions:    {}",
        format!("{:.1}", result.average_solutions()).bright_yellow()
    );

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!(
        "   Index build:      {}",
        format_duration_micros(result.index_build.as_micros())
    );
    println!(
        "   Plain filter:     {} ({} per puzzle)",
        format_duration_micros(result.plain_duration.as_micros()),
        format_duration_micros(result.per_puzzle(result.plain_duration).as_micros())
    );
    println!(
        "   Indexed:          {} ({} per puzzle)",
        format_duration_micros(result.indexed_duration.as_micros()),
        format_duration_micros(result.per_puzzle(result.indexed_duration).as_micros())
    );

    if result.mismatches == 0 {
        println!("\n{}", "✅ Plain and indexed results agree".green().bold());
    } else {
        println!(
            "\n{}",
            format!("❌ {} puzzles disagree between solvers", result.mismatches)
                .red()
                .bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{SolveConfig, solve_word_list};
    use crate::wordlists::Dictionary;

    fn solved() -> SolveResult {
        let dictionary = Dictionary::from_words(["abet", "beet", "bead"]);
        solve_word_list(SolveConfig::new("aBet".to_string()), &dictionary).unwrap()
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn plain_result_is_one_word_per_line() {
        let mut out = Vec::new();
        write_solve_result(&mut out, &solved(), true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "abet\nbeet\n");
    }

    #[test]
    fn full_result_lists_numbered_words() {
        let mut out = Vec::new();
        write_solve_result(&mut out, &solved(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Valid words (2):"));
        assert!(text.contains("1. abet"));
        assert!(text.contains("Searched 3 words"));
    }

    #[test]
    fn write_errors_are_returned() {
        let result = solved();
        let err = write_solve_result(&mut BrokenPipe, &result, false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(write_solve_result(&mut BrokenPipe, &result, true).is_err());
    }
}
