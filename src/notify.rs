//! Notification and animation cues.
//!
//! The ledger's collaborator-facing side: after a successful mutation the app
//! fires a toast (title, description, severity) and, on completion, an XP
//! animation cue. Presentation is up to the implementation; the core never
//! waits on it.

use std::cell::RefCell;

/// How long a UI should keep the XP animation on screen.
pub const POINTS_ANIMATION_MS: u64 = 2000;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&self, title: &str, description: &str, severity: Severity);

    /// Cue a "+N XP" animation for a just-completed task.
    fn points_animation(&self, points: u32);
}

/// Prints toasts to stdout and XP cues alongside them.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, description: &str, severity: Severity) {
        match severity {
            Severity::Warning => eprintln!("{title} — {description}"),
            _ => println!("{title} — {description}"),
        }
    }

    fn points_animation(&self, points: u32) {
        println!("+{points} XP");
    }
}

/// A recorded toast, for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Toast {
        title: String,
        description: String,
        severity: Severity,
    },
    PointsAnimation(u32),
}

/// Captures events instead of displaying them. Used by tests and useful for
/// any embedding that renders notifications itself.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: RefCell<Vec<Event>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Toast { title, .. } => Some(title.clone()),
                Event::PointsAnimation(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, description: &str, severity: Severity) {
        self.events.borrow_mut().push(Event::Toast {
            title: title.to_string(),
            description: description.to_string(),
            severity,
        });
    }

    fn points_animation(&self, points: u32) {
        self.events
            .borrow_mut()
            .push(Event::PointsAnimation(points));
    }
}
