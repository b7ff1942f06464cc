//! Spelling Bee Solver - CLI
//!
//! Solves Spelling Bee puzzles against a built-in or user-supplied word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spellbee_solver::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_simple, solve_word_list},
    output::{print_benchmark_result, print_solve_result},
    session::Session,
};

#[derive(Parser)]
#[command(
    name = "spellbee_solver",
    about = "Spelling Bee solver: every dictionary word spelled from the puzzle letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default, small sample) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Show debug logging (`RUST_LOG` overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Simple,

    /// Solve one puzzle, e.g. `solve traMple`
    Solve {
        /// Puzzle letters with the center letter in capitals
        puzzle: String,

        /// Print bare words, one per line
        #[arg(short, long)]
        plain: bool,

        /// Build the letter index before solving
        #[arg(short, long)]
        indexed: bool,
    },

    /// Time the plain filter against the index on random puzzles
    Benchmark {
        /// Number of random puzzles
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Seed for reproducible puzzles
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut session = load_session(&cli.wordlist)?;

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&mut session).context("Interactive session failed"),
        Commands::Solve {
            puzzle,
            plain,
            indexed,
        } => run_solve_command(&session, puzzle, plain, indexed),
        Commands::Benchmark { count, seed } => run_benchmark_command(&session, count, seed),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Load the dictionary selected by the -w flag
fn load_session(wordlist: &str) -> Result<Session> {
    match wordlist {
        "builtin" => Ok(Session::builtin()),
        path => Session::from_file(path).with_context(|| format!("Cannot load wordlist '{path}'")),
    }
}

fn run_solve_command(session: &Session, puzzle: String, plain: bool, indexed: bool) -> Result<()> {
    let config = SolveConfig::new(puzzle).indexed(indexed);
    let result = solve_word_list(config, &session.dictionary())?;
    print_solve_result(&result, plain).context("Cannot write solutions")
}

fn run_benchmark_command(session: &Session, count: usize, seed: Option<u64>) -> Result<()> {
    println!("{}", session.describe());
    println!("Running benchmark on {count} random puzzles...");

    let config = BenchmarkConfig { count, seed };
    let result = run_benchmark(&config, &session.dictionary()).map_err(|e| anyhow::anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}
