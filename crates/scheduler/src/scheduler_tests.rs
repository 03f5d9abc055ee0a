// SPDX-License-Identifier: MIT

use super::*;
use hc_core::log_entry::{LogEvent, LogStatus};
use hc_core::task::{Method, NewTask, Step, TaskType};
use hc_engine::ChainRunner;
use hc_executor::{StepExecutor, DEFAULT_TIMEOUT};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn harness(dir: &tempfile::TempDir) -> Scheduler<hc_core::SystemClock> {
    let store = Arc::new(Store::new(dir.path()));
    let logger = Arc::new(Logger::new(store.clone()));
    let task_runner = Arc::new(TaskRunner::new(ChainRunner::new(StepExecutor::new(DEFAULT_TIMEOUT)), logger.clone()));
    Scheduler::new(store, task_runner, logger, hc_core::SystemClock)
}

fn step(url: String) -> Step {
    Step { name: "ping".to_string(), url, method: Method::Get, headers: Default::default(), body: Default::default(), extract_params: vec![] }
}

#[tokio::test]
async fn s3_malformed_cron_logs_failure_and_stays_unscheduled() {
    let dir = tempfile::tempdir().unwrap();
    let scheduler = harness(&dir);

    let id = scheduler
        .add_task(NewTask {
            name: "bad-cron".to_string(),
            task_type: TaskType::Cron,
            cron_expression: Some("not a cron".to_string()),
            interval_seconds: None,
            steps: vec![step("http://example.test/x".to_string())],
            retry_times: 0,
        })
        .unwrap();

    assert!(!scheduler.jobs.lock().contains_key(&id), "malformed schedule must not register a timer");

    let logs = scheduler.logger.store.load_logs(Some(id), None).unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].status, LogStatus::Failure);
    assert!(logs[0].message.contains("cron expression parse error"), "{}", logs[0].message);

    // the task itself still persists, just unscheduled.
    assert!(scheduler.store.get_task(id).is_ok());
}

#[tokio::test]
async fn s4_overlapping_fires_never_run_concurrently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(250)))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let scheduler = harness(&dir);

    let id = scheduler
        .add_task(NewTask {
            name: "overlap".to_string(),
            task_type: TaskType::Interval,
            cron_expression: None,
            interval_seconds: Some(1),
            steps: vec![step(format!("{}/slow", server.uri()))],
            retry_times: 0,
        })
        .unwrap();

    tokio::time::sleep(Duration::from_millis(2600)).await;
    scheduler.shutdown().await;

    let logs = scheduler.store.load_logs(Some(id), None).unwrap();
    let starts = logs.iter().filter(|l| l.event == LogEvent::Start).count();
    let completes = logs.iter().filter(|l| l.event == LogEvent::Complete).count();
    assert_eq!(starts, completes, "every observed start must have a matching completion, not an overlap");
    assert!(starts >= 1, "at least one fire should have run in 2.6s at a 1s interval");
}

#[tokio::test]
async fn s6_pause_resume_delete_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("GET")).and(path("/ok")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let scheduler = harness(&dir);

    let id = scheduler
        .add_task(NewTask {
            name: "lifecycle".to_string(),
            task_type: TaskType::Interval,
            cron_expression: None,
            interval_seconds: Some(1),
            steps: vec![step(format!("{}/ok", server.uri()))],
            retry_times: 0,
        })
        .unwrap();
    assert!(scheduler.jobs.lock().contains_key(&id));

    scheduler.pause_task(id).unwrap();
    assert!(!scheduler.jobs.lock().contains_key(&id));
    assert_eq!(scheduler.store.get_task(id).unwrap().status, hc_core::TaskStatus::Paused);

    scheduler.resume_task(id).unwrap();
    assert!(scheduler.jobs.lock().contains_key(&id));
    assert_eq!(scheduler.store.get_task(id).unwrap().status, hc_core::TaskStatus::Active);

    scheduler.delete_task(id).unwrap();
    assert!(!scheduler.jobs.lock().contains_key(&id));
    assert!(scheduler.store.get_task(id).is_err(), "deleted task is not found via get_task");
    assert!(
        scheduler.store.load_tasks().unwrap().iter().any(|t| t.id == id && t.is_deleted()),
        "load_tasks still carries the tombstone"
    );

    scheduler.shutdown().await;
}

#[tokio::test]
async fn run_task_now_fires_immediately_without_waiting_for_the_timer() {
    let server = MockServer::start().await;
    Mock::given(method("GET")).and(path("/ok")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let scheduler = harness(&dir);

    let id = scheduler
        .add_task(NewTask {
            name: "manual".to_string(),
            task_type: TaskType::Interval,
            cron_expression: None,
            interval_seconds: Some(3600),
            steps: vec![step(format!("{}/ok", server.uri()))],
            retry_times: 0,
        })
        .unwrap();

    assert!(scheduler.run_task_now(id).await.unwrap());
    tokio::time::sleep(Duration::from_millis(100)).await;

    let logs = scheduler.store.load_logs(Some(id), None).unwrap();
    assert!(logs.iter().any(|l| l.event == LogEvent::Complete && l.status == LogStatus::Success));

    scheduler.shutdown().await;
}

#[tokio::test]
async fn run_task_now_on_unknown_id_returns_false() {
    let dir = tempfile::tempdir().unwrap();
    let scheduler = harness(&dir);
    let missing = hc_core::ids::TaskId::new(999);
    assert!(!scheduler.run_task_now(missing).await.unwrap());
}
