//! XP reward and level policy.
//!
//! Pure functions, no state. Rewards are captured on the task at completion
//! time, so changing these weights never alters already-earned XP.

use crate::types::Priority;

/// XP needed to advance one level.
pub const POINTS_PER_LEVEL: u32 = 50;

/// XP awarded for completing a task with the given priority.
///
/// Tasks without a priority still earn a small reward.
pub const fn points_for(priority: Option<Priority>) -> u32 {
    match priority {
        Some(Priority::Low) => 3,
        Some(Priority::Medium) => 5,
        Some(Priority::High) => 7,
        None => 2,
    }
}

/// Level derived from lifetime total points. Zero points is level 1.
pub const fn level_for(total_points: u32) -> u32 {
    total_points / POINTS_PER_LEVEL + 1
}

/// XP still needed to reach the next level.
pub const fn points_to_next_level(total_points: u32) -> u32 {
    level_for(total_points) * POINTS_PER_LEVEL - total_points
}
