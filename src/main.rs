//! Word Sieve - CLI
//!
//! Dictionary filter with TUI and CLI modes.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_sieve::{
    commands::{SimpleSession, dictionary_stats, run_filter, run_simple, write_snapshot},
    config::{Config, DEFAULT_LIMIT, DEFAULT_SIZE},
    index::Dictionary,
    interactive::{App, run_tui},
    output::{print_filter_result, print_snapshot_summary, print_stats},
    scoring::{FrequencyTable, RankStrategy},
};

#[derive(Parser)]
#[command(
    name = "word_sieve",
    about = "Filter a word list by letter constraints and rank what is left",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list, one word per line (default: built-in sample)
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// Index cache: loaded if present, written after building from the word list
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Word frequency table, one '<word> <weight>' per line
    #[arg(short, long, global = true)]
    freq: Option<PathBuf>,

    /// Word length to search
    #[arg(short, long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Sort order: alpha, score (default) or freq
    #[arg(long, global = true, default_value = "score")]
    sort: RankStrategy,

    /// Rows to print, or rows per page in the TUI
    #[arg(short, long, global = true, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Score pools smaller than this against the baseline letter table (0 = never)
    #[arg(long, global = true, default_value_t = 0)]
    baseline: usize,

    /// Show progress while ingesting large word lists
    #[arg(long, global = true)]
    progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based interactive mode without TUI
    Simple,

    /// Apply hints and print the ranked matches
    Filter {
        /// Hint command, e.g. "c a 1" or "f crane G-Y--"; repeatable
        #[arg(short = 'H', long = "hint")]
        hints: Vec<String>,
    },

    /// Print word counts per length and the letter distribution
    Stats,

    /// Build the index and write it to a snapshot file
    Snapshot {
        /// Output path
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            dictionary: self.dict.clone(),
            snapshot: self.snapshot.clone(),
            frequencies: self.freq.clone(),
            size: self.size,
            strategy: self.sort,
            limit: self.limit,
            baseline_threshold: self.baseline,
            show_progress: self.progress,
        }
    }
}

fn init_tracing() {
    // stderr keeps log lines out of the TUI and piped stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("word_sieve=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    let dictionary = config.load_dictionary()?;
    let frequencies = config.load_frequencies()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, &dictionary, &frequencies),
        Commands::Simple => run_simple_command(&config, &dictionary, &frequencies),
        Commands::Filter { hints } => {
            run_filter_command(&config, &dictionary, &frequencies, &hints)
        }
        Commands::Stats => {
            print_stats(&dictionary_stats(&dictionary, config.size));
            Ok(())
        }
        Commands::Snapshot { output } => {
            let summary = write_snapshot(&dictionary, &output)?;
            print_snapshot_summary(&summary, &output);
            Ok(())
        }
    }
}

fn run_filter_command(
    config: &Config,
    dictionary: &Dictionary,
    frequencies: &FrequencyTable,
    hints: &[String],
) -> Result<()> {
    let result = run_filter(
        dictionary,
        config.size,
        hints,
        frequencies,
        &config.scorer(),
        config.strategy,
    )
    .map_err(|e| anyhow!("bad hint: {e}"))?;

    print_filter_result(&result, config.limit);
    Ok(())
}

fn run_simple_command(
    config: &Config,
    dictionary: &Dictionary,
    frequencies: &FrequencyTable,
) -> Result<()> {
    let mut session = SimpleSession::new(
        dictionary,
        frequencies,
        config.scorer(),
        config.size,
        config.strategy,
        config.limit,
    );
    run_simple(&mut session)?;
    Ok(())
}

fn run_play_command(
    config: &Config,
    dictionary: &Dictionary,
    frequencies: &FrequencyTable,
) -> Result<()> {
    let app = App::new(
        dictionary,
        frequencies,
        config.scorer(),
        config.size,
        config.strategy,
        config.limit,
    );
    run_tui(app)
}
