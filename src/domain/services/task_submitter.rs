// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::{JobAction, StoredTask, TaskPatch, TaskRecord, TaskStatus};
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use crate::infrastructure::observability::metrics::{TASKS_DISPATCHED_TOTAL, TASK_ROLLBACKS_TOTAL};
use crate::queue::job_queue::{JobQueue, JobRequest, QueueError};
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// 任务下发错误
#[derive(Error, Debug)]
pub enum SubmitError {
    /// 任务落库失败，没有作业被入队
    #[error("Failed to persist task: {0}")]
    Repository(#[from] RepositoryError),

    /// 作业入队失败，已尝试删除刚插入的任务
    #[error("Failed to enqueue job: {0}")]
    Enqueue(#[from] QueueError),
}

/// 任务下发器
///
/// 负责把任务记录落库并交给作业队列，入队失败时撤销插入。
pub struct TaskSubmitter<R: TaskRepository, Q: JobQueue> {
    repository: Arc<R>,
    queue: Arc<Q>,
}

impl<R: TaskRepository, Q: JobQueue> TaskSubmitter<R, Q> {
    pub fn new(repository: Arc<R>, queue: Arc<Q>) -> Self {
        Self { repository, queue }
    }

    /// 下发单个任务
    ///
    /// 流程：插入任务 -> 以插入后的快照入队 -> 回写作业ID。
    ///
    /// 入队失败时，仅在任务仍为等待状态时删除它；若worker已经开始处理，
    /// 记录保留。回写作业ID失败只记录警告，作业已被接受，不再撤销。
    ///
    /// # 参数
    ///
    /// * `record` - 构建好的等待中任务
    ///
    /// # 返回值
    ///
    /// * `Ok(StoredTask)` - 带任务ID与作业ID的任务
    /// * `Err(SubmitError)` - 插入或入队失败
    pub async fn submit(&self, record: TaskRecord) -> Result<StoredTask, SubmitError> {
        let task_id = self.repository.insert(&record).await?;
        let stored = StoredTask::new(task_id, record);
        let action = JobAction::from(stored.record.task_type());
        let job = JobRequest::new(action, stored.clone());

        match self.queue.enqueue(&job).await {
            Ok(job_id) => {
                if let Err(e) = self
                    .repository
                    .update(task_id, &TaskPatch::job_id(job_id.clone()))
                    .await
                {
                    warn!(
                        task_id = %task_id,
                        job_id = %job_id,
                        error = %e,
                        "Failed to record job id on task"
                    );
                }

                counter!(TASKS_DISPATCHED_TOTAL, "action" => action.as_str()).increment(1);
                info!(
                    task_id = %task_id,
                    job_id = %job_id,
                    action = %action,
                    target = %stored.record.target(),
                    "Task dispatched"
                );
                Ok(stored.with_job_id(job_id))
            }
            Err(e) => {
                counter!(TASK_ROLLBACKS_TOTAL, "action" => action.as_str()).increment(1);
                match self
                    .repository
                    .delete_if_status(task_id, TaskStatus::Waiting)
                    .await
                {
                    Ok(true) => {
                        warn!(task_id = %task_id, error = %e, "Enqueue failed, task removed");
                    }
                    Ok(false) => {
                        warn!(
                            task_id = %task_id,
                            error = %e,
                            "Enqueue failed, task already left waiting state and was kept"
                        );
                    }
                    Err(delete_err) => {
                        error!(
                            task_id = %task_id,
                            error = %e,
                            delete_error = %delete_err,
                            "Enqueue failed and task could not be removed"
                        );
                    }
                }
                Err(SubmitError::Enqueue(e))
            }
        }
    }
}
