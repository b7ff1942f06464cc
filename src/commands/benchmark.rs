//! Benchmark command
//!
//! Generates random puzzles from the dictionary and times the plain filter
//! against the precomputed index, checking that both agree.

use crate::core::Puzzle;
use crate::solver::{DictionaryIndex, solve_puzzle};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Number of distinct letters in a Spelling Bee puzzle
pub const PUZZLE_LETTERS: usize = 7;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    /// Fixed seed for reproducible puzzles; random when `None`
    pub seed: Option<u64>,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub dictionary_size: usize,
    pub puzzles: usize,
    pub seed: u64,
    pub total_solutions: usize,
    pub index_build: Duration,
    pub plain_duration: Duration,
    pub indexed_duration: Duration,
    pub mismatches: usize,
}

impl BenchmarkResult {
    #[must_use]
    pub fn average_solutions(&self) -> f64 {
        if self.puzzles == 0 {
            0.0
        } else {
            self.total_solutions as f64 / self.puzzles as f64
        }
    }

    /// Average of `total` over the puzzles run
    #[must_use]
    pub fn per_puzzle(&self, total: Duration) -> Duration {
        u32::try_from(self.puzzles)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| total / n)
    }
}

/// Words with exactly seven distinct ASCII letters, sorted
///
/// Every such word is the pangram of at least one puzzle.
#[must_use]
pub fn pangram_words(dictionary: &Dictionary) -> Vec<String> {
    let mut words: Vec<String> = dictionary
        .as_set()
        .par_iter()
        .filter(|word| {
            word.chars().all(|c| c.is_ascii_lowercase())
                && word.chars().collect::<FxHashSet<char>>().len() == PUZZLE_LETTERS
        })
        .cloned()
        .collect();
    words.sort_unstable();
    words
}

/// Generate `count` puzzles from pangram-capable words
///
/// Each puzzle is the word's letters in random order with one of them
/// capitalised. Returns an empty list if the dictionary has no such word.
pub fn generate_puzzles<R: Rng>(
    dictionary: &Dictionary,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let pangrams = pangram_words(dictionary);
    if pangrams.is_empty() {
        return Vec::new();
    }

    let mut puzzles = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(word) = pangrams.choose(rng) else {
            break;
        };
        let distinct: FxHashSet<char> = word.chars().collect();
        let mut letters: Vec<char> = distinct.into_iter().collect();
        // Set iteration order is not random, so sort before shuffling
        letters.sort_unstable();
        letters.shuffle(rng);
        let center = rng.random_range(0..letters.len());
        letters[center] = letters[center].to_ascii_uppercase();
        puzzles.push(letters.into_iter().collect());
    }
    puzzles
}

/// Run the benchmark
///
/// # Errors
///
/// Returns an error if the dictionary has no word with seven distinct letters
/// to build puzzles from.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    dictionary: &Dictionary,
) -> Result<BenchmarkResult, String> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let puzzles = generate_puzzles(dictionary, config.count, &mut rng);
    if puzzles.is_empty() && config.count > 0 {
        return Err("Dictionary has no words with seven distinct letters".to_string());
    }

    let build_start = Instant::now();
    let index = DictionaryIndex::build(dictionary);
    let index_build = build_start.elapsed();

    let pb = ProgressBar::new(puzzles.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let mut plain_duration = Duration::ZERO;
    let mut indexed_duration = Duration::ZERO;
    let mut total_solutions = 0;
    let mut mismatches = 0;

    for raw in &puzzles {
        // Generated puzzles always carry a capital letter
        let Ok(puzzle) = Puzzle::parse(raw) else {
            continue;
        };

        let start = Instant::now();
        let plain = solve_puzzle(&puzzle, dictionary);
        plain_duration += start.elapsed();

        let start = Instant::now();
        let indexed = index.solve_puzzle(&puzzle);
        indexed_duration += start.elapsed();

        if plain != indexed {
            log::warn!("Solvers disagree on {raw}");
            mismatches += 1;
        }
        total_solutions += plain.len();

        pb.set_message(raw.clone());
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(BenchmarkResult {
        dictionary_size: dictionary.len(),
        puzzles: puzzles.len(),
        seed,
        total_solutions,
        index_build,
        plain_duration,
        indexed_duration,
        mismatches,
    })
}
