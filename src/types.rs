//! Core types for TaskFlow.

use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Task priority controlling the XP reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

/// Recurrence cadence. Presentational only: completed recurring tasks are not
/// re-spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        }
    }
}

/// A to-do item.
///
/// `points_earned` and `completed_at` are both present iff `completed` is
/// true. The XP value is captured at completion time so later changes to the
/// priority weights never rewrite history.
///
/// Serialized field names are camelCase to stay readable alongside saves
/// written by earlier versions of the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurrence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_earned: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Lifetime XP counters and goals.
///
/// `level` is always recomputed from `total_points` on mutation; there is no
/// setter for it. Older saves may lack the monthly fields, so those default
/// on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub total_points: u32,
    pub weekly_goal: u32,
    #[serde(default = "default_monthly_goal")]
    pub monthly_goal: u32,
    pub current_week_points: u32,
    #[serde(default)]
    pub current_month_points: u32,
    pub level: u32,
}

pub const DEFAULT_WEEKLY_GOAL: u32 = 100;
pub const DEFAULT_MONTHLY_GOAL: u32 = 200;

fn default_monthly_goal() -> u32 {
    DEFAULT_MONTHLY_GOAL
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            total_points: 0,
            weekly_goal: DEFAULT_WEEKLY_GOAL,
            monthly_goal: DEFAULT_MONTHLY_GOAL,
            current_week_points: 0,
            current_month_points: 0,
            level: 1,
        }
    }
}

/// Signed XP change emitted by a store mutation, applied to the progress
/// counters in the same call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsDelta(pub i64);

impl PointsDelta {
    pub const ZERO: PointsDelta = PointsDelta(0);

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
