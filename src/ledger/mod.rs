//! Task and progress ledger.
//!
//! The [`Ledger`] owns the ordered task collection, the XP counters, and the
//! single-slot undo buffer. Every mutation that changes a task's completion
//! state applies the matching [`PointsDelta`](crate::types::PointsDelta) to
//! the counters in the same call, so the store and the counters can never
//! drift apart.

pub mod progress;
pub mod tasks;
pub mod undo;

use crate::types::{Task, UserProgress};
use undo::UndoBuffer;

/// Owned application state threaded through every operation.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    tasks: Vec<Task>,
    progress: UserProgress,
    undo: UndoBuffer,
}

impl Ledger {
    /// Fresh ledger with default progress and no tasks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously persisted state.
    pub fn from_parts(tasks: Vec<Task>, progress: UserProgress, last_deleted: Option<Task>) -> Self {
        let mut undo = UndoBuffer::default();
        if let Some(task) = last_deleted {
            undo.put(task);
        }
        Self {
            tasks,
            progress,
            undo,
        }
    }

    /// Tasks in insertion order, most recent first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    /// The task currently held in the undo slot, if any.
    pub fn last_deleted(&self) -> Option<&Task> {
        self.undo.peek()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}
