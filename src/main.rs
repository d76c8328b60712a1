//! Boggle Solver - CLI
//!
//! Solves random or given Boggle boards, measures how many words boards from
//! each generator hold, and searches for word-rich puzzles.

use anyhow::{Context, Result, anyhow, bail};
use boggle_solver::{
    commands::{
        DEFAULT_MIN_WORDS, GenerateConfig, SolveConfig, StatsConfig, dump_tree, dump_words,
        generate_puzzles, run_comparison, run_stats, solve_board,
    },
    core::PrefixIndex,
    generators::{GENERATOR_NAMES, GeneratorType, LetterDistribution},
    output::{
        print_comparison, print_puzzles, print_solve_result, print_stats_result, print_tree,
        print_words,
    },
    solver::{SearchConfig, Solver},
    wordlists::{
        DEFAULT_MIN_LENGTH, WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Boggle solver using prefix-pruned depth-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board side length
    #[arg(short = 'n', long, global = true, default_value_t = 5)]
    size: usize,

    /// Wordlist: 'builtin' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Shortest word to load from the wordlist
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Corpus for letter frequencies (defaults to the wordlist)
    #[arg(long, global = true)]
    frequency_corpus: Option<PathBuf>,

    /// Debug logging and extra detail
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board (default)
    Solve {
        /// Board generator
        #[arg(short, long, default_value = "dice", value_parser = GENERATOR_NAMES)]
        generator: String,

        /// Explicit board, rows separated by ',' or '/' (e.g. "pas,tch,exy")
        #[arg(short, long)]
        board: Option<String>,

        /// Seed for the generator
        #[arg(long)]
        seed: Option<u64>,

        /// Longest path to explore
        #[arg(long)]
        max_depth: Option<usize>,

        /// Search starting cells in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Average solution counts over many random boards
    Stats {
        /// Boards per generator
        #[arg(short, long, default_value = "1000")]
        reps: usize,

        /// Only this generator (default: compare all)
        #[arg(short, long, value_parser = GENERATOR_NAMES)]
        generator: Option<String>,

        /// Seed for the run
        #[arg(long)]
        seed: Option<u64>,

        /// Solve boards in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Generate boards and print those with many words
    Generate {
        /// Boards to try
        #[arg(short, long, default_value = "100")]
        count: usize,

        /// Words a board needs to be printed (0 prints every board)
        #[arg(short, long, default_value_t = DEFAULT_MIN_WORDS)]
        min_words: usize,

        /// Board generator
        #[arg(short, long, default_value = "dice", value_parser = GENERATOR_NAMES)]
        generator: String,

        /// Seed for the run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List vocabulary words
    Words {
        /// Only words starting with this prefix
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Maximum number of words to list
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the index below the prefix as an indented letter tree
        #[arg(short, long)]
        tree: bool,
    },
}

/// Log filter used when `RUST_LOG` is not set
const fn default_log_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the vocabulary based on the -w flag
///
/// - "builtin": the embedded word list
/// - "<path>": one word per line, first tab-separated field
fn load_vocabulary(wordlist: &str, min_length: usize) -> Result<Vec<String>> {
    match wordlist {
        "builtin" => Ok(words_from_slice(WORDS, min_length)),
        path => load_from_file(path, min_length)
            .with_context(|| format!("Failed to load wordlist '{path}'")),
    }
}

fn load_distribution(
    corpus: Option<&PathBuf>,
    vocabulary: &[String],
    min_length: usize,
) -> Result<LetterDistribution> {
    let distribution = match corpus {
        Some(path) => {
            let words = load_from_file(path, min_length).with_context(|| {
                format!("Failed to load frequency corpus '{}'", path.display())
            })?;
            LetterDistribution::from_words(&words)
        }
        None => LetterDistribution::from_words(vocabulary),
    };
    distribution.context("Cannot build letter distribution")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.size == 0 {
        bail!("Board size must be at least 1");
    }

    let vocabulary = load_vocabulary(&cli.wordlist, cli.min_length)?;
    let index = PrefixIndex::from_words(&vocabulary)
        .with_context(|| format!("No usable words in '{}'", cli.wordlist))?;

    let command = cli.command.unwrap_or(Commands::Solve {
        generator: "dice".to_string(),
        board: None,
        seed: None,
        max_depth: None,
        parallel: false,
    });

    match command {
        Commands::Solve {
            generator,
            board,
            seed,
            max_depth,
            parallel,
        } => {
            let distribution =
                load_distribution(cli.frequency_corpus.as_ref(), &vocabulary, cli.min_length)?;
            let generator = generator_by_name(&generator, &distribution)?;

            let mut search = SearchConfig::new().with_parallel(parallel);
            if let Some(depth) = max_depth {
                search = search.with_max_depth(depth);
            }
            let solver = Solver::with_config(&index, search);

            let config = SolveConfig {
                size: cli.size,
                board,
                seed,
            };
            let result = solve_board(&config, &solver, &generator).map_err(|e| anyhow!(e))?;
            print_solve_result(&result, cli.verbose);
        }
        Commands::Stats {
            reps,
            generator,
            seed,
            parallel,
        } => {
            let distribution =
                load_distribution(cli.frequency_corpus.as_ref(), &vocabulary, cli.min_length)?;
            let solver = Solver::new(&index);
            let mut config = StatsConfig::new(cli.size)
                .with_reps(reps)
                .with_parallel(parallel)
                .with_progress(true);
            config.seed = seed;

            println!("Solving {reps} boards of size {0}x{0}...", cli.size);
            if let Some(name) = generator {
                let generator = generator_by_name(&name, &distribution)?;
                let result = run_stats(&solver, &generator, &config)?;
                print_stats_result(&result);
            } else {
                let results =
                    run_comparison(&solver, &GeneratorType::all(&distribution), &config)?;
                for result in &results {
                    print_stats_result(result);
                }
                print_comparison(&results);
            }
        }
        Commands::Generate {
            count,
            min_words,
            generator,
            seed,
        } => {
            let distribution =
                load_distribution(cli.frequency_corpus.as_ref(), &vocabulary, cli.min_length)?;
            let generator = generator_by_name(&generator, &distribution)?;
            let solver = Solver::new(&index);
            let config = GenerateConfig {
                size: cli.size,
                count,
                min_words,
                seed,
            };

            let puzzles = generate_puzzles(&solver, &generator, &config)?;
            print_puzzles(&puzzles);
        }
        Commands::Words {
            prefix,
            limit,
            tree,
        } => {
            if tree {
                print_tree(&dump_tree(&index, &prefix));
            } else {
                print_words(&dump_words(&index, &prefix, limit));
            }
        }
    }

    Ok(())
}

fn generator_by_name(name: &str, distribution: &LetterDistribution) -> Result<GeneratorType> {
    GeneratorType::from_name(name, distribution)
        .ok_or_else(|| anyhow!("Unknown generator '{name}'"))
}
