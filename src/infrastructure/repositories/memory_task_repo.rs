// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::{StoredTask, TaskPatch, TaskRecord, TaskStatus};
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// 内存任务仓库
///
/// 用于测试和无数据库的本地调试，单条记录的读写在锁内完成。
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: RwLock<HashMap<Uuid, StoredTask>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.read().is_empty()
    }

    /// 当前所有任务的快照
    pub fn all(&self) -> Vec<StoredTask> {
        self.tasks.read().values().cloned().collect()
    }

    /// 修改任务状态，模拟worker接手任务
    ///
    /// # 返回值
    ///
    /// 任务存在时返回 `true`
    pub fn set_status(&self, id: Uuid, status: TaskStatus) -> bool {
        match self.tasks.write().get_mut(&id) {
            Some(stored) => {
                stored.record.set_status(status);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, record: &TaskRecord) -> Result<Uuid, RepositoryError> {
        let id = Uuid::new_v4();
        self.tasks
            .write()
            .insert(id, StoredTask::new(id, record.clone()));
        Ok(id)
    }

    async fn update(&self, id: Uuid, patch: &TaskPatch) -> Result<(), RepositoryError> {
        let mut tasks = self.tasks.write();
        let stored = tasks.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        if let Some(job_id) = &patch.job_id {
            stored.record.set_job_id(job_id.clone());
        }
        Ok(())
    }

    async fn delete_if_status(
        &self,
        id: Uuid,
        status: TaskStatus,
    ) -> Result<bool, RepositoryError> {
        let mut tasks = self.tasks.write();
        match tasks.get(&id) {
            Some(stored) if stored.record.status() == status => {
                tasks.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredTask>, RepositoryError> {
        Ok(self.tasks.read().get(&id).cloned())
    }
}
