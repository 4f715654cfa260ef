//! Application facade tying the ledger to storage and notifications.
//!
//! Each operation runs to completion before the next: mutate the ledger,
//! write through to storage, then fire the toast or animation cue. The store
//! mutation and its points delta always land together; a failed validation
//! leaves both state and disk untouched.

use crate::config::Config;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::notify::{Notifier, Severity};
use crate::storage::{PROGRESS_KEY, Storage, THEME_KEY};
use crate::types::{Priority, Recurrence, Task, UserProgress};
use chrono::NaiveDate;
use tracing::info;

pub struct App<N: Notifier> {
    ledger: Ledger,
    storage: Storage,
    notifier: N,
    dark_mode: bool,
}

impl<N: Notifier> App<N> {
    /// Load persisted state. Progress goals and the dark-mode flag are seeded
    /// from config only for keys that have never been written.
    pub fn open(storage: Storage, config: &Config, notifier: N) -> LedgerResult<Self> {
        let mut ledger = storage.load_ledger();
        if !storage.contains(PROGRESS_KEY) {
            let mut progress = UserProgress::default();
            progress
                .set_weekly_goal(config.weekly_goal)
                .and_then(|()| progress.set_monthly_goal(config.monthly_goal))
                .map_err(|e| e.with_field("config"))?;
            ledger = Ledger::from_parts(
                ledger.tasks().to_vec(),
                progress,
                ledger.last_deleted().cloned(),
            );
        }
        let dark_mode = if storage.contains(THEME_KEY) {
            storage.load_theme()
        } else {
            config.dark_mode
        };
        Ok(Self {
            ledger,
            storage,
            notifier,
            dark_mode,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        self.ledger.tasks()
    }

    pub fn progress(&self) -> &UserProgress {
        self.ledger.progress()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn add_task(
        &mut self,
        text: &str,
        deadline: Option<NaiveDate>,
        priority: Option<Priority>,
        recurring: Option<Recurrence>,
    ) -> LedgerResult<Task> {
        let task = self.ledger.add(text, deadline, priority, recurring)?.clone();
        self.persist()?;
        info!(id = %task.id, "task added");
        self.notifier.notify(
            "Task Added! 🎉",
            "Your task has been successfully added to the list.",
            Severity::Success,
        );
        Ok(task)
    }

    pub fn toggle_task(&mut self, id: &str) -> LedgerResult<Task> {
        let (task, delta) = self.ledger.toggle(id)?;
        self.persist()?;
        info!(id = %task.id, delta = delta.0, "task toggled");
        if task.completed
            && let Some(points) = task.points_earned
        {
            self.notifier.points_animation(points);
        }
        Ok(task)
    }

    pub fn remove_task(&mut self, id: &str) -> LedgerResult<Task> {
        let (task, delta) = self.ledger.remove(id)?;
        self.persist()?;
        info!(id = %task.id, delta = delta.0, "task removed");
        self.notifier.notify(
            "Task Removed",
            "Task deleted successfully. You can undo this action.",
            Severity::Info,
        );
        Ok(task)
    }

    /// Restore the most recently removed task, if any. `Ok(None)` means there
    /// was nothing to undo; the notifier has already surfaced that.
    pub fn undo_delete(&mut self) -> LedgerResult<Option<Task>> {
        match self.ledger.restore_last() {
            Some((task, delta)) => {
                self.persist()?;
                info!(id = %task.id, delta = delta.0, "task restored");
                self.notifier.notify(
                    "Task Restored! ↩️",
                    "Your task has been restored successfully.",
                    Severity::Success,
                );
                Ok(Some(task))
            }
            None => {
                self.notifier.notify(
                    "Nothing to Undo",
                    "No recently deleted task to restore.",
                    Severity::Warning,
                );
                Ok(None)
            }
        }
    }

    pub fn set_weekly_goal(&mut self, goal: u32) -> LedgerResult<()> {
        self.ledger.set_weekly_goal(goal)?;
        self.persist()?;
        self.notifier.notify(
            "Goal Updated",
            &format!("Weekly goal set to {goal} XP."),
            Severity::Success,
        );
        Ok(())
    }

    pub fn set_monthly_goal(&mut self, goal: u32) -> LedgerResult<()> {
        self.ledger.set_monthly_goal(goal)?;
        self.persist()?;
        self.notifier.notify(
            "Goal Updated",
            &format!("Monthly goal set to {goal} XP."),
            Severity::Success,
        );
        Ok(())
    }

    /// Flip and persist the dark-mode preference. Returns the new value.
    pub fn toggle_theme(&mut self) -> LedgerResult<bool> {
        self.dark_mode = !self.dark_mode;
        self.storage
            .save_theme(self.dark_mode)
            .map_err(LedgerError::storage)?;
        Ok(self.dark_mode)
    }

    fn persist(&self) -> LedgerResult<()> {
        self.storage
            .save_ledger(&self.ledger)
            .map_err(LedgerError::storage)
    }
}
