//! Wordle Clue Solver - CLI
//!
//! Plays Wordle by accumulating per-position clues and ranking candidates by
//! English letter frequency.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, info};
use std::path::{Path, PathBuf};
use wordle_clue_solver::{
    commands::{draw_secrets, run_assist, run_benchmark, run_play, run_stats},
    config::{SessionConfig, default_stats_path},
    core::Word,
    output::{print_benchmark_result, print_game_result},
    session::GameMode,
    stats::{CsvStatsStore, ResultSink},
    wordlists::{CandidateStore, DictionarySource},
};

#[derive(Parser)]
#[command(
    name = "wordle_clue_solver",
    about = "Wordle solver driven by per-position clues and letter-frequency ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Results file (default: <data dir>/wordle_clue_solver/stats.csv)
    #[arg(long, global = true)]
    stats: Option<PathBuf>,

    /// More logging (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game against the built-in rules engine
    Play {
        /// How guesses are chosen: auto, rand or manual
        #[arg(short, long, default_value = "auto")]
        mode: GameMode,

        /// Secret word (default: random dictionary word)
        #[arg(short, long)]
        answer: Option<String>,
    },

    /// Solve a game played elsewhere by relaying its colours
    Assist {
        /// How guesses are chosen: auto, rand or manual
        #[arg(short, long, default_value = "auto")]
        mode: GameMode,
    },

    /// Play many games back to back against random secrets
    Bench {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// How guesses are chosen: auto or rand
        #[arg(short, long, default_value = "auto")]
        mode: GameMode,

        /// Append every result to the results file
        #[arg(long)]
        record: bool,
    },

    /// Show win rate and guess distribution
    Stats {
        /// Show the answer recorded for this day instead (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = DictionarySource::from_arg(&cli.wordlist);
    let stats_path = cli.stats.unwrap_or_else(default_stats_path);
    let config = SessionConfig::default();

    match cli.command {
        Commands::Play { mode, answer } => {
            let dictionary = load_dictionary(&source)?;
            let answer = answer
                .map(Word::new)
                .transpose()
                .context("Invalid answer word")?;
            let mut store = open_store(&stats_path)?;
            if let Some(result) = run_play(&dictionary, &config, mode, answer, &mut store)? {
                print_game_result(&result);
            }
        }
        Commands::Assist { mode } => {
            let dictionary = load_dictionary(&source)?;
            let mut store = open_store(&stats_path)?;
            match run_assist(&dictionary, &config, mode, &mut store) {
                Some(result) => print_game_result(&result),
                None => println!("\n👋 Game abandoned, nothing recorded.\n"),
            }
        }
        Commands::Bench {
            count,
            mode,
            record,
        } => {
            if mode == GameMode::Manual {
                bail!("bench plays unattended; use --mode auto or --mode rand");
            }
            let dictionary = load_dictionary(&source)?;
            println!("Running benchmark on {count} random words ({mode} mode)...");

            let secrets = draw_secrets(&dictionary, count, &mut rand::rng());
            let result = run_benchmark(&dictionary, &config, mode, &secrets, true);
            print_benchmark_result(&result);

            if record {
                let mut store = open_store(&stats_path)?;
                for game in &result.results {
                    store
                        .record(game)
                        .with_context(|| format!("Failed to record to {}", stats_path.display()))?;
                }
                info!("Recorded {} games", result.results.len());
            }
        }
        Commands::Stats { date } => {
            let store = open_store(&stats_path)?;
            run_stats(&store, date)?;
        }
    }

    Ok(())
}

fn load_dictionary(source: &DictionarySource) -> Result<CandidateStore> {
    let dictionary = CandidateStore::load(source)?;
    info!("Loaded {} words from {source}", dictionary.len());
    Ok(dictionary)
}

fn open_store(path: &Path) -> Result<CsvStatsStore> {
    CsvStatsStore::open(path)
        .with_context(|| format!("Failed to open results file {}", path.display()))
}
