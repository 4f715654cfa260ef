//! TaskFlow CLI entry point.

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use taskflow::app::App;
use taskflow::cli::{Cli, Command, GoalPeriod};
use taskflow::config::{CONFIG_PATH_ENV, Config};
use taskflow::error::{ErrorCode, LedgerError};
use taskflow::format::{
    OutputFormat, format_progress_json, format_progress_markdown, format_tasks_json,
    format_tasks_markdown,
};
use taskflow::notify::ConsoleNotifier;
use taskflow::storage::Storage;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            let file = OpenOptions::new().create(true).append(true).open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    // If an explicit config path is given, hand it to Config::load via env
    // SAFETY: set at startup before any other threads exist
    if let Some(config_path) = &cli.config {
        unsafe {
            std::env::set_var(CONFIG_PATH_ENV, config_path);
        }
    }
    let config = Config::load()?;

    let data_dir = cli
        .data_dir
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(Storage::default_dir);
    debug!(data_dir = %data_dir.display(), "opening storage");
    let storage = Storage::open(data_dir)?;

    let format = cli.format.unwrap_or(config.format);
    let mut app = App::open(storage, &config, ConsoleNotifier)?;

    match cli.command {
        Command::Add {
            text,
            deadline,
            priority,
            recurring,
        } => {
            surface(app.add_task(&text, deadline, priority, recurring));
        }

        Command::List => match format {
            OutputFormat::Json => println!("{}", format_tasks_json(app.tasks())),
            OutputFormat::Markdown => print!("{}", format_tasks_markdown(app.tasks())),
        },

        Command::Toggle { id } => {
            surface(app.toggle_task(&id));
        }

        Command::Rm { id } => {
            surface(app.remove_task(&id));
        }

        Command::Undo => {
            surface(app.undo_delete());
        }

        Command::Goal { period } => match period {
            GoalPeriod::Weekly { goal } => surface(app.set_weekly_goal(goal)),
            GoalPeriod::Monthly { goal } => surface(app.set_monthly_goal(goal)),
        },

        Command::Progress => match format {
            OutputFormat::Json => println!("{}", format_progress_json(app.progress())),
            OutputFormat::Markdown => print!("{}", format_progress_markdown(app.progress())),
        },

        Command::Theme => {
            let dark = app.toggle_theme()?;
            println!("Dark mode {}", if dark { "enabled" } else { "disabled" });
        }
    }

    Ok(())
}

/// Surface an operation result the way the UI shell does: validation and
/// not-found failures print a message and leave state untouched; the process
/// still exits cleanly since nothing was half-applied. Storage failures are
/// real errors.
fn surface<T>(result: Result<T, LedgerError>) {
    if let Err(err) = result {
        match err.code {
            ErrorCode::EmptyTaskText | ErrorCode::InvalidGoal | ErrorCode::TaskNotFound => {
                eprintln!("{err}");
            }
            ErrorCode::StorageError | ErrorCode::InternalError => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}
