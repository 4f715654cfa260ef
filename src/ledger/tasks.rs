//! Task store operations: add, toggle, remove, restore.

use super::Ledger;
use crate::error::{LedgerError, LedgerResult};
use crate::points::points_for;
use crate::types::{PointsDelta, Priority, Recurrence, Task};
use chrono::{NaiveDate, Utc};

impl Ledger {
    /// Create a task and prepend it to the collection (most recent first).
    ///
    /// Rejects text that is empty after trimming; no state changes in that
    /// case.
    pub fn add(
        &mut self,
        text: &str,
        deadline: Option<NaiveDate>,
        priority: Option<Priority>,
        recurring: Option<Recurrence>,
    ) -> LedgerResult<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LedgerError::empty_task_text());
        }

        let now = Utc::now();
        let task = Task {
            id: self.next_task_id(),
            text: text.to_string(),
            completed: false,
            created_at: now,
            deadline,
            priority,
            recurring,
            points_earned: None,
            completed_at: None,
        };
        self.tasks.insert(0, task);
        Ok(&self.tasks[0])
    }

    /// Flip a task's completion state and apply the matching XP delta.
    ///
    /// Completing awards `points_for(priority)` and stamps the task with the
    /// earned amount; uncompleting refunds exactly what was stamped, so a
    /// toggle round trip is always net zero.
    pub fn toggle(&mut self, id: &str) -> LedgerResult<(Task, PointsDelta)> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| LedgerError::task_not_found(id))?;

        let delta = if task.completed {
            // Saves from before points were captured may lack the stamp;
            // fall back to the current policy value.
            let points = task
                .points_earned
                .take()
                .unwrap_or_else(|| points_for(task.priority));
            task.completed = false;
            task.completed_at = None;
            PointsDelta(-i64::from(points))
        } else {
            let points = points_for(task.priority);
            task.completed = true;
            task.points_earned = Some(points);
            task.completed_at = Some(Utc::now());
            PointsDelta(i64::from(points))
        };

        let task = task.clone();
        self.progress.apply_delta(delta);
        Ok((task, delta))
    }

    /// Delete a task into the undo slot, refunding its XP if it was
    /// completed. Overwrites any task already in the slot.
    pub fn remove(&mut self, id: &str) -> LedgerResult<(Task, PointsDelta)> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LedgerError::task_not_found(id))?;

        let task = self.tasks.remove(index);
        let delta = match task.points_earned {
            Some(points) if task.completed => PointsDelta(-i64::from(points)),
            _ => PointsDelta::ZERO,
        };
        self.progress.apply_delta(delta);
        self.undo.put(task.clone());
        Ok((task, delta))
    }

    /// Reinsert the most recently removed task at the head of the
    /// collection, re-crediting its XP if it was completed.
    ///
    /// `None` means the undo slot is empty. That is an ordinary outcome, not
    /// an error; callers surface it as a "nothing to undo" notice.
    pub fn restore_last(&mut self) -> Option<(Task, PointsDelta)> {
        let task = self.undo.take()?;
        let delta = match task.points_earned {
            Some(points) if task.completed => PointsDelta(i64::from(points)),
            _ => PointsDelta::ZERO,
        };
        self.tasks.insert(0, task.clone());
        self.progress.apply_delta(delta);
        Some((task, delta))
    }

    /// Millisecond-timestamp id, bumped past any collision since two adds
    /// can land in the same millisecond.
    fn next_task_id(&self) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        loop {
            let id = candidate.to_string();
            if !self.tasks.iter().any(|t| t.id == id) {
                return id;
            }
            candidate += 1;
        }
    }
}
