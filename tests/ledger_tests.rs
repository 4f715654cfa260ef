//! Integration tests for the task and progress ledger.
//!
//! These exercise the invariants the ledger must hold across any sequence of
//! operations: counters never go negative, level always tracks total points,
//! and undo is exactly reversible.

use taskflow::error::ErrorCode;
use taskflow::ledger::Ledger;
use taskflow::points::level_for;
use taskflow::types::{Priority, UserProgress};

fn add(ledger: &mut Ledger, text: &str, priority: Option<Priority>) -> String {
    ledger
        .add(text, None, priority, None)
        .expect("add task")
        .id
        .clone()
}

mod toggle_round_trips {
    use super::*;

    #[test]
    fn net_delta_is_zero_after_even_toggles() {
        let mut ledger = Ledger::new();
        let id = add(&mut ledger, "report", Some(Priority::High));

        for _ in 0..4 {
            ledger.toggle(&id).expect("toggle");
        }

        assert_eq!(ledger.progress().total_points, 0);
        assert_eq!(ledger.progress().current_week_points, 0);
        assert_eq!(ledger.progress().current_month_points, 0);
        assert!(!ledger.tasks()[0].completed);
    }

    #[test]
    fn net_delta_is_reward_after_odd_toggles() {
        let mut ledger = Ledger::new();
        let id = add(&mut ledger, "report", Some(Priority::Medium));

        for _ in 0..5 {
            ledger.toggle(&id).expect("toggle");
        }

        assert_eq!(ledger.progress().total_points, 5);
        assert!(ledger.tasks()[0].completed);
        assert_eq!(ledger.tasks()[0].points_earned, Some(5));
    }

    #[test]
    fn points_captured_at_completion_survive_re_toggle() {
        let mut ledger = Ledger::new();
        let id = add(&mut ledger, "chore", None);

        let (task, _) = ledger.toggle(&id).expect("complete");
        assert_eq!(task.points_earned, Some(2));
        let (task, _) = ledger.toggle(&id).expect("uncomplete");
        assert_eq!(task.points_earned, None);
        let (task, _) = ledger.toggle(&id).expect("re-complete");
        assert_eq!(task.points_earned, Some(2));
    }
}

mod counter_invariants {
    use super::*;

    #[test]
    fn counters_never_go_negative() {
        // Progress loaded from an old save can sit below what the task
        // collection implies; removals must clamp, not underflow.
        let mut ledger = Ledger::new();
        let id = add(&mut ledger, "big task", Some(Priority::High));
        ledger.toggle(&id).expect("complete");

        let drained = UserProgress {
            total_points: 3,
            current_week_points: 0,
            current_month_points: 1,
            ..UserProgress::default()
        };
        let mut ledger = Ledger::from_parts(ledger.tasks().to_vec(), drained, None);

        ledger.remove(&id).expect("remove completed");
        assert_eq!(ledger.progress().total_points, 0);
        assert_eq!(ledger.progress().current_week_points, 0);
        assert_eq!(ledger.progress().current_month_points, 0);
    }

    #[test]
    fn level_matches_formula_after_every_operation() {
        let mut ledger = Ledger::new();
        let mut ids = Vec::new();
        for i in 0..10 {
            ids.push(add(&mut ledger, &format!("task {i}"), Some(Priority::High)));
        }
        for id in &ids {
            ledger.toggle(id).expect("complete");
            let p = ledger.progress();
            assert_eq!(p.level, level_for(p.total_points));
        }
        // 10 high-priority completions = 70 XP = level 2
        assert_eq!(ledger.progress().total_points, 70);
        assert_eq!(ledger.progress().level, 2);

        for id in &ids {
            ledger.remove(id).expect("remove");
            let p = ledger.progress();
            assert_eq!(p.level, level_for(p.total_points));
        }
        assert_eq!(ledger.progress().level, 1);
    }
}

mod undo {
    use super::*;

    #[test]
    fn remove_then_restore_is_a_full_round_trip() {
        let mut ledger = Ledger::new();
        let id = add(&mut ledger, "precious", Some(Priority::High));
        ledger.toggle(&id).expect("complete");

        let tasks_before = ledger.tasks().to_vec();
        let progress_before = ledger.progress().clone();

        ledger.remove(&id).expect("remove");
        ledger.restore_last().expect("restore");

        assert_eq!(ledger.tasks(), tasks_before.as_slice());
        assert_eq!(ledger.progress(), &progress_before);
    }

    #[test]
    fn restore_twice_yields_task_then_empty() {
        let mut ledger = Ledger::new();
        let id = add(&mut ledger, "once", None);
        ledger.remove(&id).expect("remove");

        assert!(ledger.restore_last().is_some());
        assert!(ledger.restore_last().is_none());
    }
}

mod scenarios {
    use super::*;

    /// The canonical high-priority lifecycle: complete, uncomplete,
    /// re-complete, remove, undo.
    #[test]
    fn high_priority_task_lifecycle() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.progress().total_points, 0);

        let a = add(&mut ledger, "task A", Some(Priority::High));

        let (task, _) = ledger.toggle(&a).expect("complete");
        assert_eq!(task.points_earned, Some(7));
        assert_eq!(ledger.progress().total_points, 7);
        assert_eq!(ledger.progress().level, 1);

        let (task, _) = ledger.toggle(&a).expect("uncomplete");
        assert_eq!(task.points_earned, None);
        assert_eq!(ledger.progress().total_points, 0);

        ledger.toggle(&a).expect("re-complete");
        assert_eq!(ledger.progress().total_points, 7);

        ledger.remove(&a).expect("remove");
        assert_eq!(ledger.progress().total_points, 0);
        assert_eq!(ledger.last_deleted().map(|t| t.id.as_str()), Some(a.as_str()));

        ledger.restore_last().expect("undo");
        assert_eq!(ledger.progress().total_points, 7);
        let restored = &ledger.tasks()[0];
        assert_eq!(restored.id, a);
        assert!(restored.completed);
        assert_eq!(restored.points_earned, Some(7));
    }

    #[test]
    fn zero_goal_is_rejected_and_prior_goal_kept() {
        let mut ledger = Ledger::new();
        ledger.set_weekly_goal(150).expect("valid goal");

        let err = ledger.set_weekly_goal(0).expect_err("zero goal");
        assert_eq!(err.code, ErrorCode::InvalidGoal);
        assert_eq!(ledger.progress().weekly_goal, 150);
    }

    #[test]
    fn loaded_state_resumes_cleanly() {
        let mut ledger = Ledger::new();
        let id = add(&mut ledger, "persisted", Some(Priority::Low));
        ledger.toggle(&id).expect("complete");

        let reloaded = Ledger::from_parts(
            ledger.tasks().to_vec(),
            ledger.progress().clone(),
            ledger.last_deleted().cloned(),
        );
        assert_eq!(reloaded.tasks(), ledger.tasks());
        assert_eq!(reloaded.progress(), ledger.progress());
        assert_eq!(reloaded.completed_count(), 1);
    }

    #[test]
    fn weekly_counters_are_not_reset_by_time() {
        // Deliberate: goals track lifetime totals, no calendar rollover.
        let mut ledger = Ledger::new();
        let p = UserProgress::default();
        assert_eq!(p.current_week_points, 0);

        let id = add(&mut ledger, "task", Some(Priority::High));
        ledger.toggle(&id).expect("complete");
        assert_eq!(
            ledger.progress().current_week_points,
            ledger.progress().total_points
        );
        assert_eq!(
            ledger.progress().current_month_points,
            ledger.progress().total_points
        );
    }
}
