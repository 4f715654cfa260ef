//! Integration tests for the JSON key-value store.

use taskflow::ledger::Ledger;
use taskflow::storage::{PROGRESS_KEY, Storage, TASKS_KEY};
use taskflow::types::{Priority, Task, UserProgress};
use tempfile::tempdir;

fn setup() -> (tempfile::TempDir, Storage) {
    let dir = tempdir().expect("tempdir");
    let storage = Storage::open(dir.path()).expect("open storage");
    (dir, storage)
}

mod ledger_round_trip {
    use super::*;

    #[test]
    fn saved_ledger_loads_identically() {
        let (_dir, storage) = setup();

        let mut ledger = Ledger::new();
        ledger
            .add("buy milk", None, Some(Priority::Low), None)
            .expect("add");
        let id = ledger.tasks()[0].id.clone();
        ledger.toggle(&id).expect("complete");
        ledger
            .add("water plants", None, None, None)
            .expect("add");

        storage.save_ledger(&ledger).expect("save");
        let loaded = storage.load_ledger();

        assert_eq!(loaded.tasks(), ledger.tasks());
        assert_eq!(loaded.progress(), ledger.progress());
    }

    #[test]
    fn undo_slot_survives_save_and_load() {
        let (_dir, storage) = setup();

        let mut ledger = Ledger::new();
        ledger.add("ephemeral", None, None, None).expect("add");
        let id = ledger.tasks()[0].id.clone();
        ledger.remove(&id).expect("remove");

        storage.save_ledger(&ledger).expect("save");
        let mut loaded = storage.load_ledger();

        let (task, _) = loaded.restore_last().expect("undo after reload");
        assert_eq!(task.id, id);

        // Consuming the slot and saving again clears the persisted key
        storage.save_ledger(&loaded).expect("save");
        let reloaded = storage.load_ledger();
        assert!(reloaded.last_deleted().is_none());
    }

    #[test]
    fn stored_json_uses_camel_case_keys() {
        let (dir, storage) = setup();

        let mut ledger = Ledger::new();
        ledger
            .add("report", None, Some(Priority::High), None)
            .expect("add");
        let id = ledger.tasks()[0].id.clone();
        ledger.toggle(&id).expect("complete");
        storage.save_ledger(&ledger).expect("save");

        let tasks_raw =
            std::fs::read_to_string(dir.path().join("tasks.json")).expect("read tasks.json");
        assert!(tasks_raw.contains("\"createdAt\""));
        assert!(tasks_raw.contains("\"pointsEarned\""));
        assert!(tasks_raw.contains("\"completedAt\""));

        let progress_raw = std::fs::read_to_string(dir.path().join("user_progress.json"))
            .expect("read user_progress.json");
        assert!(progress_raw.contains("\"totalPoints\""));
        assert!(progress_raw.contains("\"currentWeekPoints\""));
    }
}

mod migration {
    use super::*;

    #[test]
    fn old_progress_without_monthly_fields_gets_defaults() {
        let (dir, storage) = setup();

        let old_save = r#"{
            "totalPoints": 57,
            "weeklyGoal": 100,
            "currentWeekPoints": 57,
            "level": 2
        }"#;
        std::fs::write(dir.path().join(format!("{PROGRESS_KEY}.json")), old_save)
            .expect("write old save");

        let progress: UserProgress = storage
            .load(PROGRESS_KEY)
            .expect("load")
            .expect("key present");
        assert_eq!(progress.monthly_goal, 200);
        assert_eq!(progress.current_month_points, 0);
        assert_eq!(progress.total_points, 57);
        assert_eq!(progress.level, 2);
    }

    #[test]
    fn tasks_without_optional_fields_still_parse() {
        let (dir, storage) = setup();

        let minimal = r#"[{
            "id": "1700000000000",
            "text": "legacy task",
            "completed": false,
            "createdAt": "2024-01-01T00:00:00Z"
        }]"#;
        std::fs::write(dir.path().join(format!("{TASKS_KEY}.json")), minimal)
            .expect("write legacy tasks");

        let tasks: Vec<Task> = storage.load(TASKS_KEY).expect("load").expect("key present");
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].priority.is_none());
        assert!(tasks[0].deadline.is_none());
        assert!(tasks[0].points_earned.is_none());
    }
}
