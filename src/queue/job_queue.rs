// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::{JobAction, StoredTask};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// 队列错误类型
#[derive(Error, Debug)]
pub enum QueueError {
    /// 队列后端错误
    #[error("Queue backend error: {0}")]
    Backend(#[from] anyhow::Error),

    /// 作业序列化失败
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 入队超时
    #[error("Enqueue timed out after {0:?}")]
    Timeout(Duration),
}

/// 下发给worker的作业
///
/// `data` 是任务落库之后的快照，入队后不再随任务更新。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    #[serde(rename = "celery_action")]
    pub action: JobAction,
    pub data: StoredTask,
}

impl JobRequest {
    pub fn new(action: JobAction, data: StoredTask) -> Self {
        Self { action, data }
    }
}

/// 作业队列特质
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// 入队作业
    ///
    /// # 参数
    ///
    /// * `job` - 要入队的作业
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 队列接受作业后分配的作业ID
    /// * `Err(QueueError)` - 入队失败，作业未被接受
    async fn enqueue(&self, job: &JobRequest) -> Result<String, QueueError>;
}

#[async_trait]
impl<T: JobQueue + ?Sized> JobQueue for Arc<T> {
    async fn enqueue(&self, job: &JobRequest) -> Result<String, QueueError> {
        (**self).enqueue(job).await
    }
}
