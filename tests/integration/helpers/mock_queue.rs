// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::anyhow;
use arl_dispatch::domain::models::task::TaskStatus;
use arl_dispatch::infrastructure::repositories::memory_task_repo::InMemoryTaskRepository;
use arl_dispatch::queue::job_queue::{JobQueue, JobRequest, QueueError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// 脚本化作业队列
///
/// 记录所有被接受的作业；可配置在第N次调用（从1开始）时失败，
/// 失败前还可以把任务标记为运行中，模拟worker抢先接手。
#[derive(Default)]
pub struct ScriptedJobQueue {
    accepted: Mutex<Vec<JobRequest>>,
    calls: Mutex<usize>,
    fail_on_call: Option<usize>,
    race_with: Option<Arc<InMemoryTaskRepository>>,
}

impl ScriptedJobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    /// 失败前先把任务状态改为运行中
    pub fn racing_worker(mut self, repo: Arc<InMemoryTaskRepository>) -> Self {
        self.race_with = Some(repo);
        self
    }

    pub fn accepted(&self) -> Vec<JobRequest> {
        self.accepted.lock().clone()
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl JobQueue for ScriptedJobQueue {
    async fn enqueue(&self, job: &JobRequest) -> Result<String, QueueError> {
        let call = {
            let mut calls = self.calls.lock();
            *calls += 1;
            *calls
        };

        if self.fail_on_call == Some(call) {
            if let Some(repo) = &self.race_with {
                repo.set_status(job.data.task_id, TaskStatus::Running);
            }
            return Err(QueueError::Backend(anyhow!("broker rejected job #{}", call)));
        }

        self.accepted.lock().push(job.clone());
        Ok(format!("job-{}", call))
    }
}
