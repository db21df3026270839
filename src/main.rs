//! Word Ladder - CLI
//!
//! Shortest-ladder solver and fill-in puzzle with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use word_ladder::{
    commands::{SolveConfig, run_benchmark, run_simple, solve_ladder},
    core::WordSet,
    logging::init_logger,
    output::{print_benchmark_result, print_solve_result, print_words_read},
    puzzle::{DEFAULT_WORD_LENGTH, PuzzleConfig},
    solver::DEFAULT_MIN_LADDER_LEN,
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladders and a fill-in-the-ladder puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI puzzle (default)
    Play(PuzzleArgs),

    /// Simple CLI puzzle (line-based, no TUI)
    Simple(PuzzleArgs),

    /// Find the shortest ladder between two words
    Solve {
        /// First word of the ladder
        start: String,

        /// Last word of the ladder
        end: String,

        /// Show search statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Search random word pairs and summarise ladder lengths
    Benchmark {
        /// Letters per word
        #[arg(short = 'l', long, default_value_t = DEFAULT_WORD_LENGTH)]
        length: usize,

        /// Number of random pairs to search
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible pair selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Clone, Copy)]
struct PuzzleArgs {
    /// Letters per word
    #[arg(short = 'l', long, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Minimum ladder length, counting both endpoints
    #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_LADDER_LEN)]
    min_ladder: usize,

    /// Random pairs to try before giving up (0 = unbounded)
    #[arg(long, default_value = "100000")]
    max_attempts: usize,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for PuzzleArgs {
    fn default() -> Self {
        Self {
            length: DEFAULT_WORD_LENGTH,
            min_ladder: DEFAULT_MIN_LADDER_LEN,
            max_attempts: 100_000,
            seed: None,
        }
    }
}

impl PuzzleArgs {
    fn config(self) -> PuzzleConfig {
        PuzzleConfig {
            word_length: self.length,
            min_ladder_len: self.min_ladder,
            max_attempts: (self.max_attempts > 0).then_some(self.max_attempts),
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(Dictionary::embedded()),
        path => load_from_file(path).with_context(|| format!("could not read dictionary {path}")),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.debug);

    if let Err(err) = run(cli) {
        log::error!("{err:#}");
        eprintln!("{} {err:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let dictionary = load_dictionary(&cli.wordlist)?;
    print_words_read(dictionary.words_read());

    // Default to Play mode if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(PuzzleArgs::default()));

    match command {
        Commands::Play(args) => run_play_command(&dictionary, args),
        Commands::Simple(args) => run_simple_command(&dictionary, args),
        Commands::Solve {
            start,
            end,
            verbose,
        } => run_solve_command(&dictionary, start, end, verbose),
        Commands::Benchmark {
            length,
            count,
            seed,
        } => run_benchmark_command(&dictionary, length, count, seed),
    }
}

fn puzzle_words(dictionary: &Dictionary, config: &PuzzleConfig) -> Result<WordSet> {
    config.validate()?;
    Ok(dictionary.word_set(config.word_length)?)
}

fn run_solve_command(dictionary: &Dictionary, start: String, end: String, verbose: bool) -> Result<()> {
    let config = SolveConfig::new(start, end);
    let result = solve_ladder(dictionary, &config)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_simple_command(dictionary: &Dictionary, args: PuzzleArgs) -> Result<()> {
    let config = args.config();
    let words = puzzle_words(dictionary, &config)?;
    let mut rng = make_rng(args.seed);

    run_simple(&words, &config, &mut rng)?;
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, args: PuzzleArgs) -> Result<()> {
    use word_ladder::interactive::{App, run_tui};

    let config = args.config();
    let words = puzzle_words(dictionary, &config)?;
    let app = App::new(&words, config, make_rng(args.seed))?;
    run_tui(app)
}

fn run_benchmark_command(
    dictionary: &Dictionary,
    length: usize,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    let words = dictionary.word_set(length)?;
    let mut rng = make_rng(seed);

    println!(
        "Running benchmark on {count} random pairs of {length}-letter words ({} in dictionary)...",
        words.len()
    );
    let result = run_benchmark(&words, count, &mut rng);
    print_benchmark_result(&result);
    Ok(())
}
