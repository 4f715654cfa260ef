//! Output formatting for task lists and progress summaries.

use crate::points::points_to_next_level;
use crate::types::{Priority, Task, UserProgress};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Output format for list and progress views.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Markdown,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }
}

/// Display ordering: incomplete before complete, then priority (high first,
/// none last), then newest first. Presentation only; the stored order stays
/// insertion order.
pub fn sort_for_display(tasks: &[Task]) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| priority_rank(a.priority).cmp(&priority_rank(b.priority)))
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    sorted
}

fn priority_rank(priority: Option<Priority>) -> u8 {
    match priority {
        Some(Priority::High) => 0,
        Some(Priority::Medium) => 1,
        Some(Priority::Low) => 2,
        None => 3,
    }
}

/// Format a single task as a markdown list entry with its badges.
pub fn format_task_markdown(task: &Task) -> String {
    let mut line = String::new();
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    line.push_str(&format!("- {} {} (`{}`)", checkbox, task.text, task.id));

    if let Some(points) = task.points_earned {
        line.push_str(&format!(" +{} XP", points));
    }
    if let Some(priority) = task.priority {
        line.push_str(&format!(" [{}]", priority.as_str()));
    }
    if let Some(deadline) = task.deadline {
        line.push_str(&format!(" [due {}]", deadline));
    }
    if let Some(recurring) = task.recurring {
        line.push_str(&format!(" [{}]", recurring.as_str()));
    }
    line.push('\n');
    line
}

/// Format the task list as markdown with a completion stats line.
pub fn format_tasks_markdown(tasks: &[Task]) -> String {
    let mut md = String::new();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let total = tasks.len();

    md.push_str(&format!("# Tasks ({})\n\n", total));
    if total == 0 {
        md.push_str("No tasks yet. Add your first task to get started.\n");
        return md;
    }

    for task in sort_for_display(tasks) {
        md.push_str(&format_task_markdown(task));
    }

    let percent = completed * 100 / total;
    md.push_str(&format!(
        "\n{} of {} completed ({}%)\n",
        completed, total, percent
    ));
    md
}

/// Format the task list as JSON in display order.
pub fn format_tasks_json(tasks: &[Task]) -> String {
    let sorted = sort_for_display(tasks);
    serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| "[]".to_string())
}

/// Format the progress summary as markdown.
pub fn format_progress_markdown(progress: &UserProgress) -> String {
    let mut md = String::new();

    md.push_str("# Progress\n");
    md.push_str(&format!("- **total XP**: {}\n", progress.total_points));
    md.push_str(&format!(
        "- **level**: {} ({} XP to next level)\n",
        progress.level,
        points_to_next_level(progress.total_points)
    ));
    md.push_str(&format!(
        "- **this week**: {} / {} XP ({}%)\n",
        progress.current_week_points,
        progress.weekly_goal,
        goal_percent(progress.current_week_points, progress.weekly_goal)
    ));
    md.push_str(&format!(
        "- **this month**: {} / {} XP ({}%)\n",
        progress.current_month_points,
        progress.monthly_goal,
        goal_percent(progress.current_month_points, progress.monthly_goal)
    ));

    if progress.current_week_points >= progress.weekly_goal {
        md.push_str("\nWeekly goal achieved!\n");
    }
    md
}

/// Format the progress summary as JSON, including the derived display values.
pub fn format_progress_json(progress: &UserProgress) -> String {
    let value = json!({
        "progress": progress,
        "pointsToNextLevel": points_to_next_level(progress.total_points),
        "weeklyPercent": goal_percent(progress.current_week_points, progress.weekly_goal),
        "monthlyPercent": goal_percent(progress.current_month_points, progress.monthly_goal),
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

/// Percentage of a goal reached, rounded to the nearest whole percent.
/// Goals are validated positive, but guard the division anyway.
fn goal_percent(current: u32, goal: u32) -> u32 {
    if goal == 0 {
        return 0;
    }
    ((f64::from(current) / f64::from(goal)) * 100.0).round() as u32
}
