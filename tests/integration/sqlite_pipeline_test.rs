// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::mock_queue::ScriptedJobQueue;
use super::helpers::use_case;
use arl_dispatch::config::settings::DatabaseSettings;
use arl_dispatch::domain::models::options::TaskOptions;
use arl_dispatch::domain::models::task::TaskStatus;
use arl_dispatch::domain::repositories::task_repository::TaskRepository;
use arl_dispatch::infrastructure::database::connection;
use arl_dispatch::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use std::sync::Arc;

async fn sqlite_repo() -> Arc<TaskRepositoryImpl> {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(5),
        idle_timeout: None,
    };
    let db = connection::connect(&settings).await.unwrap();
    Arc::new(TaskRepositoryImpl::new(Arc::new(db)))
}

#[tokio::test]
async fn test_direct_submission_persists_tasks_with_job_ids() {
    let repo = sqlite_repo().await;
    let queue = Arc::new(ScriptedJobQueue::new());
    let use_case = use_case(repo.clone(), queue.clone());

    let tasks = use_case
        .submit_direct("10.0.0.0/24 example.com", "sqlite", &TaskOptions::default())
        .await
        .unwrap();

    assert_eq!(tasks.len(), 2);
    for task in &tasks {
        let stored = repo.find_by_id(task.task_id).await.unwrap().unwrap();
        assert_eq!(&stored, task);
        assert_eq!(stored.record.status(), TaskStatus::Waiting);
    }
}

#[tokio::test]
async fn test_partial_failure_removes_only_the_failed_task() {
    let repo = sqlite_repo().await;
    let queue = Arc::new(ScriptedJobQueue::failing_on(3));
    let use_case = use_case(repo.clone(), queue.clone());

    let err = use_case
        .submit_direct("10.0.0.1, a.com, b.com", "sqlite", &TaskOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.submitted.len(), 2);
    for task in &err.submitted {
        assert!(repo.find_by_id(task.task_id).await.unwrap().is_some());
    }
}
