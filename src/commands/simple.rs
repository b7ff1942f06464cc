//! Simple interactive CLI mode
//!
//! Text-based loop: type a puzzle to solve it, or a command to manage the
//! dictionary.

use crate::output::write_solutions;
use crate::session::Session;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One parsed line of user input
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Help,
    Info,
    Load(&'a str),
    /// `load` without a path
    LoadMissingPath,
    Empty,
    Puzzle(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(head, rest)| (head, rest.trim()));

        match head.to_lowercase().as_str() {
            "" => Self::Empty,
            "quit" | "q" | "exit" => Self::Quit,
            "help" | "h" | "?" => Self::Help,
            "info" => Self::Info,
            "load" if rest.is_empty() => Self::LoadMissingPath,
            "load" => Self::Load(rest),
            _ => Self::Puzzle(line),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading user input or writing output fails.
pub fn run_simple(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, stdin.lock(), stdout.lock())
}

/// Run the interactive loop over arbitrary input and output
///
/// Ends on `quit` or end of input. Solve and load failures are reported and
/// the loop continues with the previous dictionary.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║            Spelling Bee Solver - Interactive Mode            ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "{}", session.describe().bright_black())?;
    print_help(&mut out)?;

    let mut line = String::new();
    loop {
        write!(out, "{} ", "Puzzle>".bright_cyan().bold())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match Input::parse(&line) {
            Input::Empty => {}
            Input::Quit => break,
            Input::Help => print_help(&mut out)?,
            Input::Info => writeln!(out, "{}\n", session.describe())?,
            Input::LoadMissingPath => {
                writeln!(out, "{}\n", "❌ Usage: load <path>".red())?;
            }
            Input::Load(path) => match session.reload(path) {
                Ok(()) => writeln!(out, "✓ {}\n", session.describe().green())?,
                Err(e) => {
                    writeln!(out, "{} {e}", "❌ Error:".red().bold())?;
                    writeln!(out, "   Still using {}\n", session.label())?;
                }
            },
            Input::Puzzle(raw) => match session.solve(raw) {
                Ok(solutions) => {
                    writeln!(out)?;
                    write_solutions(&mut out, &solutions)?;
                    writeln!(out)?;
                }
                Err(e) => writeln!(out, "{} {e}\n", "❌ Error:".red().bold())?,
            },
        }
    }

    writeln!(out, "👋 Bye!")?;
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Enter the puzzle letters with the center letter in capitals,")?;
    writeln!(out, "e.g. traMple. Commands:\n")?;
    writeln!(out, "  load <path>   switch to another dictionary file")?;
    writeln!(out, "  info          show the active dictionary")?;
    writeln!(out, "  help          show this message")?;
    writeln!(out, "  quit          exit\n")
}
