//! Benchmark command
//!
//! Searches many random word pairs and summarises the ladder lengths found.

use crate::core::WordSet;
use crate::solver::LadderSearch;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub word_length: usize,
    pub dictionary_size: usize,
    pub pairs: usize,
    pub reachable: usize,
    pub unreachable: usize,
    pub average_len: f64,
    pub min_len: usize,
    pub max_len: usize,
    /// Ladder length (words, endpoints included) to number of pairs
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Search `count` random pairs of distinct nodes
///
/// Sets with fewer than two words produce an empty result.
pub fn run_benchmark<R: Rng + ?Sized>(
    words: &WordSet,
    count: usize,
    rng: &mut R,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut search = LadderSearch::new(words);
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut unreachable = 0;
    let mut total_len = 0;
    let mut pairs = 0;

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    if words.len() >= 2 {
        for _ in 0..count {
            let from = rng.random_range(0..words.len());
            // Shift the second draw so the pair is always distinct
            let to = (from + rng.random_range(1..words.len())) % words.len();
            let (Some(from), Some(to)) = (words.nth(from), words.nth(to)) else {
                continue;
            };

            pairs += 1;
            match search.shortest_path_between(from, to) {
                Some(ladder) => {
                    total_len += ladder.len();
                    *distribution.entry(ladder.len()).or_insert(0) += 1;
                }
                None => unreachable += 1,
            }

            pb.set_message(format!("{unreachable} unreachable"));
            pb.inc(1);
        }
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let reachable = pairs - unreachable;
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        word_length: words.word_length(),
        dictionary_size: words.len(),
        pairs,
        reachable,
        unreachable,
        average_len: if reachable > 0 {
            total_len as f64 / reachable as f64
        } else {
            0.0
        },
        min_len: distribution.keys().next().copied().unwrap_or(0),
        max_len: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        duration,
        searches_per_second: if secs > 0.0 { pairs as f64 / secs } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn benchmark_counts_every_pair() {
        let set = WordSet::build(["cat", "cot", "cog", "dog", "emu"], 3);
        let mut rng = StdRng::seed_from_u64(5);

        let result = run_benchmark(&set, 40, &mut rng);

        assert_eq!(result.pairs, 40);
        assert_eq!(result.reachable + result.unreachable, 40);
        assert_eq!(result.distribution.values().sum::<usize>(), result.reachable);
        assert!(result.min_len >= 2);
        assert!(result.max_len <= 4);
        assert_eq!(result.dictionary_size, 5);
    }

    #[test]
    fn benchmark_all_unreachable() {
        let set = WordSet::build(["cat", "dog"], 3);
        let mut rng = StdRng::seed_from_u64(5);

        let result = run_benchmark(&set, 10, &mut rng);

        assert_eq!(result.unreachable, 10);
        assert_eq!(result.reachable, 0);
        assert!(result.average_len.abs() < f64::EPSILON);
        assert_eq!(result.min_len, 0);
    }

    #[test]
    fn benchmark_needs_two_words() {
        let set = WordSet::build(["cat"], 3);
        let mut rng = StdRng::seed_from_u64(5);

        let result = run_benchmark(&set, 10, &mut rng);
        assert_eq!(result.pairs, 0);
    }
}
