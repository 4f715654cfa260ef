//! Single-slot undo buffer for the most recently removed task.

use crate::types::Task;

/// Holds at most one removed task. A new removal overwrites any occupant;
/// only the latest deletion is recoverable.
#[derive(Debug, Clone, Default)]
pub struct UndoBuffer {
    slot: Option<Task>,
}

impl UndoBuffer {
    pub fn put(&mut self, task: Task) {
        self.slot = Some(task);
    }

    /// Remove and return the slot's content, leaving it empty.
    pub fn take(&mut self) -> Option<Task> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<&Task> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
