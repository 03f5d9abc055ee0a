// SPDX-License-Identifier: MIT

use super::*;
use hc_core::task::{ExtractParam, Method, ParamType, Step, TaskStatus, TaskType};
use hc_core::ids::TaskId;
use hc_executor::DEFAULT_TIMEOUT;
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn login_step(url: String) -> Step {
    Step {
        name: "login".to_string(),
        url,
        method: Method::Post,
        headers: HashMap::new(),
        body: HashMap::new(),
        extract_params: vec![ExtractParam {
            name: "token".to_string(),
            path: "$.data.token".to_string(),
            param_type: ParamType::String,
        }],
    }
}

fn use_step(url: String) -> Step {
    let mut headers = HashMap::new();
    headers.insert("Authorization".to_string(), "Bearer ${token}".to_string());
    Step { name: "use".to_string(), url, method: Method::Get, headers, body: HashMap::new(), extract_params: vec![] }
}

fn task_with(steps: Vec<Step>, retry_times: u32) -> Task {
    Task {
        id: TaskId::new(1),
        name: "chain".to_string(),
        task_type: TaskType::Interval,
        cron_expression: None,
        interval_seconds: Some(60),
        steps,
        retry_times,
        status: TaskStatus::Active,
        created_at: "2026-01-01 00:00:00".to_string(),
    }
}

#[tokio::test]
async fn s1_interval_chain_happy_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"token": "T"}})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let task = task_with(
        vec![login_step(format!("{}/auth", server.uri())), use_step(format!("{}/me", server.uri()))],
        0,
    );
    let runner = ChainRunner::new(hc_executor::StepExecutor::new(DEFAULT_TIMEOUT));
    let result = runner.run(&task).await;

    assert!(result.success);
    assert!(result.error.is_none());
    assert_eq!(result.steps.len(), 2);
    assert!(result.steps.iter().all(|s| s.result.success));
    assert_eq!(result.steps[1].result.headers.get("Authorization"), Some(&"Bearer T".to_string()));
}

#[tokio::test]
async fn s2_step_failure_stops_chain_and_retries_per_policy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let task = task_with(
        vec![login_step(format!("{}/auth", server.uri())), use_step(format!("{}/me", server.uri()))],
        1,
    );
    let runner = ChainRunner::new(hc_executor::StepExecutor::new(DEFAULT_TIMEOUT));
    let result = runner.run(&task).await;

    assert!(!result.success);
    assert_eq!(result.steps.len(), 1, "second step must never be invoked");
    assert_eq!(result.error.as_deref(), Some("step 1 failed: HTTP error: 500 boom"));
}

#[tokio::test]
async fn retries_succeed_before_exhausting_budget() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"token": "T"}})))
        .mount(&server)
        .await;

    let task = task_with(vec![login_step(format!("{}/auth", server.uri()))], 2);
    let runner = ChainRunner::new(hc_executor::StepExecutor::new(DEFAULT_TIMEOUT));
    let result = runner.run(&task).await;

    assert!(result.success);
    assert_eq!(result.steps.len(), 1);
}
