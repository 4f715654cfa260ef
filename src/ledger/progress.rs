//! XP counter updates and goal setters.

use super::Ledger;
use crate::error::{LedgerError, LedgerResult};
use crate::points::level_for;
use crate::types::{PointsDelta, UserProgress};

impl UserProgress {
    /// Apply a signed XP delta to all three counters.
    ///
    /// Each counter clamps at zero independently, and `level` is recomputed
    /// from the new total. The weekly and monthly counters are never reset on
    /// calendar boundaries; see DESIGN.md.
    pub fn apply_delta(&mut self, delta: PointsDelta) {
        self.total_points = clamp_add(self.total_points, delta.0);
        self.current_week_points = clamp_add(self.current_week_points, delta.0);
        self.current_month_points = clamp_add(self.current_month_points, delta.0);
        self.level = level_for(self.total_points);
    }

    /// Replace the weekly goal. Zero is rejected without mutating.
    pub fn set_weekly_goal(&mut self, goal: u32) -> LedgerResult<()> {
        if goal == 0 {
            return Err(LedgerError::invalid_goal("weeklyGoal"));
        }
        self.weekly_goal = goal;
        Ok(())
    }

    /// Replace the monthly goal. Zero is rejected without mutating.
    pub fn set_monthly_goal(&mut self, goal: u32) -> LedgerResult<()> {
        if goal == 0 {
            return Err(LedgerError::invalid_goal("monthlyGoal"));
        }
        self.monthly_goal = goal;
        Ok(())
    }
}

fn clamp_add(counter: u32, delta: i64) -> u32 {
    let next = i64::from(counter) + delta;
    u32::try_from(next.max(0)).unwrap_or(u32::MAX)
}

impl Ledger {
    pub fn set_weekly_goal(&mut self, goal: u32) -> LedgerResult<()> {
        self.progress.set_weekly_goal(goal)
    }

    pub fn set_monthly_goal(&mut self, goal: u32) -> LedgerResult<()> {
        self.progress.set_monthly_goal(goal)
    }
}
