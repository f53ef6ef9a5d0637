// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::mock_queue::ScriptedJobQueue;
use super::helpers::use_case;
use arl_dispatch::application::dto::submit_task_request::{SubmitMode, SubmitTaskRequestDto};
use arl_dispatch::application::use_cases::submit_task_use_case::SubmitTaskError;
use arl_dispatch::domain::models::options::TaskOptions;
use arl_dispatch::domain::models::task::{JobAction, TaskTag, TaskType};
use arl_dispatch::domain::services::task_submitter::SubmitError;
use arl_dispatch::infrastructure::repositories::memory_task_repo::InMemoryTaskRepository;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_submit_crawl_creates_single_cruising_task() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let queue = Arc::new(ScriptedJobQueue::new());
    let use_case = use_case(repo.clone(), queue.clone());
    let options = TaskOptions::from_value(json!({"poc_config": [{"plugin_name": "a"}, {"plugin_name": "b"}]}))
        .unwrap();

    let tasks = use_case
        .submit_crawl(
            "http://a.com/x/y?q=1, http://a.com/x/z b.com:8443",
            "cruise",
            &options,
        )
        .await
        .unwrap();

    assert_eq!(tasks.len(), 1);
    let record = &tasks[0].record;
    assert_eq!(record.task_type(), TaskType::RiskCruising);
    assert_eq!(record.tag(), TaskTag::RiskCruising);
    assert_eq!(record.target(), "target count = 2, PoC count = 2");
    assert_eq!(
        record.cruising_target(),
        Some(&["b.com:8443".to_string(), "http://a.com/x".to_string()][..])
    );

    let accepted = queue.accepted();
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].action, JobAction::RunRiskCruising);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_submit_crawl_against_result_set() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let queue = Arc::new(ScriptedJobQueue::new());
    let use_case = use_case(repo.clone(), queue.clone());

    let tasks = use_case
        .execute(SubmitTaskRequestDto {
            name: "cruise".to_string(),
            target: "placeholder.com".to_string(),
            mode: SubmitMode::RiskCruising,
            options: Some(json!({
                "result_set_id": "r1",
                "result_set_len": 5,
                "poc_config": [1, 2, 3]
            })),
        })
        .await
        .unwrap();

    let record = &tasks[0].record;
    assert_eq!(record.result_set_id(), Some("r1"));
    assert_eq!(record.target(), "target count = 5, PoC count = 3");
    assert!(record.cruising_target().is_none());
    assert!(record.options().result_set_id.is_none());

    let payload = serde_json::to_value(&queue.accepted()[0]).unwrap();
    assert_eq!(payload["celery_action"], json!("run_risk_cruising"));
    assert_eq!(payload["data"]["result_set_id"], json!("r1"));
    assert!(payload["data"]["options"].get("result_set_len").is_none());
}

#[tokio::test]
async fn test_submit_crawl_enqueue_failure_rolls_back() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let queue = Arc::new(ScriptedJobQueue::failing_on(1));
    let use_case = use_case(repo.clone(), queue.clone());

    let err = use_case
        .submit_crawl("a.com", "cruise", &TaskOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitTaskError::Submit(SubmitError::Enqueue(_))));
    assert!(repo.is_empty());
}
