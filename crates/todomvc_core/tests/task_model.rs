use todomvc_core::{Filter, Task, TaskValidationError};

#[test]
fn task_new_trims_title_and_starts_open() {
    let task = Task::new("  Buy milk \n").unwrap();

    assert_eq!(task.title, "Buy milk");
    assert!(!task.completed);
    assert!(task.is_active());
    assert_eq!(task.id.len(), 36);
}

#[test]
fn task_new_rejects_blank_titles() {
    assert!(Task::new("").is_none());
    assert!(Task::new(" \t\n ").is_none());
}

#[test]
fn with_id_reports_validation_errors() {
    assert_eq!(
        Task::with_id("", "title").unwrap_err(),
        TaskValidationError::EmptyId
    );
    assert_eq!(
        Task::with_id("abc", "   ").unwrap_err(),
        TaskValidationError::BlankTitle
    );
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::with_id("11111111-2222-4333-8444-555555555555", "ship it").unwrap();
    task.completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "11111111-2222-4333-8444-555555555555",
            "title": "ship it",
            "completed": true
        })
    );

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn filter_defaults_to_all() {
    assert_eq!(Filter::default(), Filter::All);
    assert_eq!(Filter::All.to_string(), "all");
}
