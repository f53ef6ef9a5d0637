// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::mock_queue::ScriptedJobQueue;
use super::helpers::use_case;
use arl_dispatch::application::dto::submit_task_request::{SubmitMode, SubmitTaskRequestDto};
use arl_dispatch::application::use_cases::submit_task_use_case::SubmitTaskError;
use arl_dispatch::domain::models::options::TaskOptions;
use arl_dispatch::domain::models::target::TargetError;
use arl_dispatch::domain::models::task::{JobAction, TaskStatus, TaskTag, TaskType};
use arl_dispatch::domain::repositories::task_repository::TaskRepository;
use arl_dispatch::domain::services::task_submitter::SubmitError;
use arl_dispatch::infrastructure::repositories::memory_task_repo::InMemoryTaskRepository;
use arl_dispatch::queue::job_queue::QueueError;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_submit_direct_splits_ips_and_domains() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let queue = Arc::new(ScriptedJobQueue::new());
    let use_case = use_case(repo.clone(), queue.clone());
    let options = TaskOptions {
        domain_brute: true,
        alt_dns: true,
        ..Default::default()
    };

    let tasks = use_case
        .submit_direct("2.2.2.2, example.com 1.1.1.1", "weekly", &options)
        .await
        .unwrap();

    assert_eq!(tasks.len(), 2);

    let ip_task = &tasks[0].record;
    assert_eq!(ip_task.task_type(), TaskType::Ip);
    assert_eq!(ip_task.tag(), TaskTag::Task);
    assert_eq!(ip_task.target(), "1.1.1.1 2.2.2.2");
    assert!(!ip_task.options().domain_brute);
    assert!(!ip_task.options().alt_dns);
    assert_eq!(ip_task.job_id(), "job-1");

    let domain_task = &tasks[1].record;
    assert_eq!(domain_task.task_type(), TaskType::Domain);
    assert_eq!(domain_task.target(), "example.com");
    assert!(domain_task.options().domain_brute);
    assert_eq!(domain_task.job_id(), "job-2");

    let actions: Vec<_> = queue.accepted().iter().map(|job| job.action).collect();
    assert_eq!(actions, vec![JobAction::IpTask, JobAction::DomainTask]);

    for task in &tasks {
        let stored = repo.find_by_id(task.task_id).await.unwrap().unwrap();
        assert_eq!(stored.record.job_id(), task.record.job_id());
        assert_eq!(stored.record.status(), TaskStatus::Waiting);
    }
}

#[tokio::test]
async fn test_submit_direct_keeps_prior_successes_and_stops_at_first_failure() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    // ip task, a.com, then b.com fails
    let queue = Arc::new(ScriptedJobQueue::failing_on(3));
    let use_case = use_case(repo.clone(), queue.clone());

    let err = use_case
        .submit_direct("10.0.0.1, a.com, b.com", "batch", &TaskOptions::default())
        .await
        .unwrap_err();

    let targets: Vec<_> = err
        .submitted
        .iter()
        .map(|task| task.record.target().to_string())
        .collect();
    assert_eq!(targets, vec!["10.0.0.1", "a.com"]);
    assert!(matches!(
        err.error,
        SubmitTaskError::Submit(SubmitError::Enqueue(QueueError::Backend(_)))
    ));

    let stored = repo.all();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|task| task.record.target() != "b.com"));
}

#[tokio::test]
async fn test_submit_direct_failure_on_first_domain_skips_the_rest() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let queue = Arc::new(ScriptedJobQueue::failing_on(2));
    let use_case = use_case(repo.clone(), queue.clone());

    let err = use_case
        .submit_direct("10.0.0.1 a.com b.com c.com", "batch", &TaskOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.submitted.len(), 1);
    assert_eq!(err.submitted[0].record.task_type(), TaskType::Ip);
    assert_eq!(queue.calls(), 2);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_submit_direct_rejects_blacklisted_target_before_any_write() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let queue = Arc::new(ScriptedJobQueue::new());
    let use_case = use_case(repo.clone(), queue.clone());

    let err = use_case
        .submit_direct("example.com 127.0.0.1", "batch", &TaskOptions::default())
        .await
        .unwrap_err();

    assert!(err.submitted.is_empty());
    assert!(matches!(
        err.error,
        SubmitTaskError::Target(TargetError::BlacklistedTarget(ref target)) if target == "127.0.0.1"
    ));
    assert_eq!(queue.calls(), 0);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_failed_dispatch_keeps_task_already_taken_by_worker() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let queue = Arc::new(ScriptedJobQueue::failing_on(1).racing_worker(repo.clone()));
    let use_case = use_case(repo.clone(), queue.clone());

    let err = use_case
        .submit_direct("a.com", "batch", &TaskOptions::default())
        .await
        .unwrap_err();

    assert!(err.submitted.is_empty());
    let stored = repo.all();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].record.status(), TaskStatus::Running);
}

#[tokio::test]
async fn test_execute_direct_request() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let queue = Arc::new(ScriptedJobQueue::new());
    let use_case = use_case(repo.clone(), queue.clone());

    let tasks = use_case
        .execute(SubmitTaskRequestDto {
            name: "from-dto".to_string(),
            target: "A.com,b.com a.com".to_string(),
            mode: SubmitMode::Direct,
            options: Some(json!({"domain_brute": true, "port_scan": "top100"})),
        })
        .await
        .unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].record.target(), "a.com");
    assert_eq!(tasks[1].record.target(), "b.com");
    assert_eq!(
        tasks[0].record.options().extra.get("port_scan"),
        Some(&json!("top100"))
    );
}

#[tokio::test]
async fn test_execute_rejects_blank_target_and_bad_options() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let queue = Arc::new(ScriptedJobQueue::new());
    let use_case = use_case(repo.clone(), queue.clone());

    let blank = use_case
        .execute(SubmitTaskRequestDto {
            name: "blank".to_string(),
            target: " , ".to_string(),
            mode: SubmitMode::Direct,
            options: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(blank.error, SubmitTaskError::Validation(_)));

    let bad_options = use_case
        .execute(SubmitTaskRequestDto {
            name: "bad".to_string(),
            target: "a.com".to_string(),
            mode: SubmitMode::Direct,
            options: Some(json!(["domain_brute"])),
        })
        .await
        .unwrap_err();
    assert!(matches!(bad_options.error, SubmitTaskError::Build(_)));

    assert_eq!(queue.calls(), 0);
    assert!(repo.is_empty());
}
