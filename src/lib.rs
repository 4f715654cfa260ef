//! TaskFlow core library.
//!
//! A gamified to-do ledger: tasks earn XP at completion, XP accumulates
//! toward weekly and monthly goals and a level, and the most recent deletion
//! can be undone. State persists as JSON files in a local data directory.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod ledger;
pub mod notify;
pub mod points;
pub mod storage;
pub mod types;
