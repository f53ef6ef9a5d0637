// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::QueueSettings;
use crate::infrastructure::cache::redis_client::RedisClient;
use crate::queue::job_queue::{JobQueue, JobRequest, QueueError};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// worker侧注册的任务名
pub const WORKER_TASK_NAME: &str = "arl_task";

#[derive(Serialize)]
struct JobEnvelope<'a> {
    id: &'a str,
    task: &'a str,
    kwargs: JobKwargs<'a>,
}

#[derive(Serialize)]
struct JobKwargs<'a> {
    options: &'a JobRequest,
}

/// 将作业编码为队列消息
///
/// 消息格式为 `{id, task, kwargs: {options: {celery_action, data}}}`。
pub fn encode_job(job_id: &str, job: &JobRequest) -> Result<String, serde_json::Error> {
    serde_json::to_string(&JobEnvelope {
        id: job_id,
        task: WORKER_TASK_NAME,
        kwargs: JobKwargs { options: job },
    })
}

/// 基于Redis列表的作业队列
///
/// 作业ID在客户端生成，消息推入成功即视为队列已接受。
pub struct RedisJobQueue {
    client: RedisClient,
    queue_key: String,
    enqueue_timeout: Duration,
}

impl RedisJobQueue {
    pub fn new(client: RedisClient, settings: &QueueSettings) -> Self {
        Self {
            client,
            queue_key: settings.key.clone(),
            enqueue_timeout: Duration::from_secs(settings.enqueue_timeout_secs),
        }
    }
}

#[async_trait]
impl JobQueue for RedisJobQueue {
    async fn enqueue(&self, job: &JobRequest) -> Result<String, QueueError> {
        let job_id = Uuid::new_v4().to_string();
        let message = encode_job(&job_id, job)?;

        let pushed = tokio::time::timeout(
            self.enqueue_timeout,
            self.client.lpush(&self.queue_key, &message),
        )
        .await
        .map_err(|_| QueueError::Timeout(self.enqueue_timeout))?;
        let depth = pushed?;

        debug!(
            job_id = %job_id,
            queue = %self.queue_key,
            depth,
            "Job pushed to queue"
        );
        Ok(job_id)
    }
}
