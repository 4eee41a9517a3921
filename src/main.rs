//! Punjabi Wordle - CLI
//!
//! Wordle-style word game for Gurmukhi with TUI and CLI modes, plus the
//! daily-word admin tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use punjabi_wordle::{
    admin::{Admin, DEFAULT_DAYS},
    commands::{
        TargetChoice, TodayReport, analyze_word, best_openers, check_guess, pick_target,
        resolve_day, run_schedule, run_simple, segment_text,
    },
    config::Settings,
    core::MatchMode,
    daily::{parse_date_key, today},
    output::{
        print_analysis_result, print_check_result, print_openers, print_schedule,
        print_segmentation, print_set_word, print_stored_words, print_today, print_validation,
    },
    validation::validate,
    wordlists::WordList,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "punjabi_wordle",
    about = "Wordle for Gurmukhi, with conjunct-aware letter matching",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file holding admin-set daily words (in-memory when unset)
    #[arg(long, global = true, env = "PUNJABI_WORDLE_STORE")]
    store: Option<PathBuf>,

    /// Shared secret for admin commands (unauthenticated when unset)
    #[arg(long, global = true, env = "ADMIN_PASSWORD", hide_env_values = true)]
    admin_secret: Option<String>,

    /// Custom word list, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Require relocated letters to match their matras too
    #[arg(long, global = true)]
    strict: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Play the word for this date (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "random")]
        date: Option<String>,

        /// Practice on a random word
        #[arg(short, long)]
        random: bool,
    },

    /// Simple line-based game without TUI
    Simple {
        /// Play the word for this date (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "random")]
        date: Option<String>,

        /// Practice on a random word
        #[arg(short, long)]
        random: bool,
    },

    /// Evaluate a guess against a target
    Check {
        /// The target word
        target: String,

        /// The guessed word
        guess: String,
    },

    /// Show how text splits into letters
    Segment {
        /// Text to segment
        text: String,
    },

    /// Check whether a word is a playable guess
    Validate {
        /// Word to validate
        word: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the word for a day
    Today {
        /// Date to look up (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze how well a guess splits the word list
    Analyze {
        /// Guess to analyze; omit to rank the best openers
        word: Option<String>,

        /// Number of openers to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Manage stored daily words
    Admin {
        #[command(subcommand)]
        command: AdminCommands,

        /// Admin credential, checked against the shared secret
        #[arg(short, long, global = true)]
        token: Option<String>,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Store the word for a date
    SetWord {
        /// Word to store
        word: String,

        /// Date to set (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List stored words for the coming days
    Upcoming {
        /// Number of days to list
        #[arg(short, long, default_value_t = DEFAULT_DAYS)]
        days: u32,

        /// First date to list (YYYY-MM-DD, default today)
        #[arg(long)]
        from: Option<String>,
    },

    /// Store the list-derived word for each of the coming days
    Schedule {
        /// Number of days to schedule
        #[arg(short, long, default_value_t = DEFAULT_DAYS)]
        days: u32,
    },
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(log_file) = &cli.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .context("failed to open log file")?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let settings = Settings {
        store_path: cli.store.clone(),
        admin_secret: cli.admin_secret.clone(),
        wordlist: cli.wordlist.clone(),
        mode: if cli.strict {
            MatchMode::Strict
        } else {
            MatchMode::Relaxed
        },
    };
    let words = settings.load_words().context("failed to load word list")?;
    debug!(words = words.len(), mode = ?settings.mode, "settings resolved");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        date: None,
        random: false,
    });

    match command {
        Commands::Play { date, random } => {
            run_play_command(&settings, &words, TargetChoice::from_flags(date.as_deref(), random))
        }
        Commands::Simple { date, random } => {
            let store = settings.open_store();
            let target = pick_target(
                TargetChoice::from_flags(date.as_deref(), random),
                store.as_ref(),
                &words,
            )?;
            run_simple(target, &words, settings.mode)
        }
        Commands::Check { target, guess } => {
            let result = check_guess(&target, &guess, settings.mode)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Segment { text } => {
            print_segmentation(&segment_text(&text));
            Ok(())
        }
        Commands::Validate { word, json } => {
            let report = validate(&word, &words);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_validation(&report);
            }
            Ok(())
        }
        Commands::Today { date, json } => {
            let store = settings.open_store();
            let resolved = resolve_day(date.as_deref(), store.as_ref(), &words)?;
            let report = TodayReport::from(&resolved);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_today(&report);
            }
            Ok(())
        }
        Commands::Analyze { word, top } => {
            run_analyze_command(word.as_deref(), top, &words, settings.mode)
        }
        Commands::Admin { command, token } => {
            run_admin_command(command, token.as_deref(), &settings, &words)
        }
    }
}

fn run_play_command(settings: &Settings, words: &WordList, choice: TargetChoice<'_>) -> Result<()> {
    use punjabi_wordle::interactive::{App, run_tui};

    let store = settings.open_store();
    let target = pick_target(choice, store.as_ref(), words)?;
    let app = App::new(target, words, settings.mode);
    run_tui(app)
}

fn run_analyze_command(
    word: Option<&str>,
    top: usize,
    words: &WordList,
    mode: MatchMode,
) -> Result<()> {
    match word {
        Some(word) => print_analysis_result(&analyze_word(word, words, mode)?),
        None => print_openers(&best_openers(words, mode, top)),
    }
    Ok(())
}

fn run_admin_command(
    command: AdminCommands,
    token: Option<&str>,
    settings: &Settings,
    words: &WordList,
) -> Result<()> {
    let gate = settings.admin_gate();
    let store = settings.open_store();
    let admin = Admin::new(&gate, store.as_ref(), words);
    debug!(store = %store.describe(), "admin command");

    match command {
        AdminCommands::SetWord { word, date } => {
            let stored = admin.set_word(token, &word, date.as_deref())?;
            print_set_word(&stored);
        }
        AdminCommands::Upcoming { days, from } => {
            let start = match from.as_deref() {
                Some(raw) => parse_date_key(raw)
                    .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD"))?,
                None => today(),
            };
            let stored = admin.upcoming(token, start, days)?;
            print_stored_words(&stored, days);
        }
        AdminCommands::Schedule { days } => {
            let outcomes = run_schedule(&admin, token, days)?;
            print_schedule(&outcomes);
        }
    }

    Ok(())
}
