//! CLI command definitions for taskflow.
//!
//! Defined with clap's derive macros; dispatch lives in `main.rs`.

use crate::format::OutputFormat;
use crate::types::{Priority, Recurrence};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Gamified to-do list: complete tasks, earn XP, level up
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Path to the data directory (overrides config)
    #[arg(short, long, global = true)]
    pub data_dir: Option<String>,

    /// Output format for list and progress views
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task text
        text: String,

        /// Optional deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<NaiveDate>,

        /// Priority controlling the XP reward
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,

        /// Recurrence cadence (display only)
        #[arg(short, long, value_enum)]
        recurring: Option<Recurrence>,
    },

    /// List tasks
    List,

    /// Toggle a task between complete and incomplete
    Toggle {
        /// Task id (shown by `list`)
        id: String,
    },

    /// Remove a task (recoverable with `undo`)
    Rm {
        /// Task id (shown by `list`)
        id: String,
    },

    /// Restore the most recently removed task
    Undo,

    /// Set the weekly or monthly XP goal
    Goal {
        #[command(subcommand)]
        period: GoalPeriod,
    },

    /// Show XP, level, and goal progress
    Progress,

    /// Toggle the dark-mode theme preference
    Theme,
}

#[derive(Subcommand, Debug)]
pub enum GoalPeriod {
    /// Set the weekly XP goal
    Weekly {
        /// Goal in XP, must be positive
        goal: u32,
    },

    /// Set the monthly XP goal
    Monthly {
        /// Goal in XP, must be positive
        goal: u32,
    },
}
