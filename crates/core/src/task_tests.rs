// SPDX-License-Identifier: MIT

use super::*;

fn sample_step() -> Step {
    Step {
        name: "login".to_string(),
        url: "https://example.test/auth".to_string(),
        method: Method::Post,
        headers: HashMap::new(),
        body: HashMap::new(),
        extract_params: vec![],
    }
}

#[yare::parameterized(
    get = { "get", Some(Method::Get) },
    lower_post = { "post", Some(Method::Post) },
    mixed_case_put = { "PuT", Some(Method::Put) },
    patch = { "PATCH", Some(Method::Patch) },
    delete = { "delete", Some(Method::Delete) },
    unknown = { "TRACE", None },
)]
fn method_parse_is_case_insensitive(raw: &str, expected: Option<Method>) {
    assert_eq!(Method::parse(raw), expected);
}

#[test]
fn step_deserializes_lowercase_method_from_json() {
    let json = serde_json::json!({
        "name": "s",
        "url": "https://example.test",
        "method": "get",
        "headers": {},
        "body": {},
        "extract_params": []
    });
    let step: Step = serde_json::from_value(json).unwrap();
    assert_eq!(step.method, Method::Get);
}

#[test]
fn step_deserialization_rejects_unknown_method() {
    let json = serde_json::json!({
        "name": "s",
        "url": "https://example.test",
        "method": "TRACE",
        "headers": {},
        "body": {},
        "extract_params": []
    });
    let result: Result<Step, _> = serde_json::from_value(json);
    assert!(result.is_err());
}

#[test]
fn json_body_methods() {
    assert!(Method::Post.sends_json_body());
    assert!(Method::Put.sends_json_body());
    assert!(Method::Patch.sends_json_body());
    assert!(!Method::Get.sends_json_body());
    assert!(!Method::Delete.sends_json_body());
}

#[test]
fn task_patch_leaves_absent_fields_unchanged() {
    let mut task = Task {
        id: TaskId::new(1),
        name: "original".to_string(),
        task_type: TaskType::Interval,
        cron_expression: None,
        interval_seconds: Some(60),
        steps: vec![sample_step()],
        retry_times: 1,
        status: TaskStatus::Active,
        created_at: "2026-01-01 00:00:00".to_string(),
    };

    let patch = TaskPatch { name: Some("renamed".to_string()), ..Default::default() };
    patch.apply_to(&mut task);

    assert_eq!(task.name, "renamed");
    assert_eq!(task.interval_seconds, Some(60));
    assert_eq!(task.retry_times, 1);
    assert_eq!(task.status, TaskStatus::Active);
}

#[test]
fn task_patch_updates_status_to_paused() {
    let mut task = Task {
        id: TaskId::new(2),
        name: "t".to_string(),
        task_type: TaskType::Cron,
        cron_expression: Some("* * * * *".to_string()),
        interval_seconds: None,
        steps: vec![sample_step()],
        retry_times: 0,
        status: TaskStatus::Active,
        created_at: "2026-01-01 00:00:00".to_string(),
    };

    let patch = TaskPatch { status: Some(TaskStatus::Paused), ..Default::default() };
    patch.apply_to(&mut task);

    assert_eq!(task.status, TaskStatus::Paused);
    assert!(!task.is_active());
    assert!(!task.is_deleted());
}

#[test]
fn deleted_task_is_terminal() {
    let mut task = Task {
        id: TaskId::new(3),
        name: "t".to_string(),
        task_type: TaskType::Interval,
        cron_expression: None,
        interval_seconds: Some(1),
        steps: vec![sample_step()],
        retry_times: 0,
        status: TaskStatus::Active,
        created_at: "2026-01-01 00:00:00".to_string(),
    };
    task.status = TaskStatus::Deleted;
    assert!(task.is_deleted());
}
