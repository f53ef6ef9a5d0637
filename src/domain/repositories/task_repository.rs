// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::{StoredTask, TaskPatch, TaskRecord, TaskStatus};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// 存储中的数据无法还原为任务
    #[error("Invalid stored data: {0}")]
    InvalidData(String),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 任务仓库特质
///
/// 定义任务下发所需的最小存储契约：插入、局部更新、带条件删除，
/// 以及按ID读取。
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 插入新任务
    ///
    /// # 参数
    ///
    /// * `record` - 待持久化的任务记录
    ///
    /// # 返回值
    ///
    /// * `Ok(Uuid)` - 存储分配的任务ID
    /// * `Err(RepositoryError)` - 插入失败
    async fn insert(&self, record: &TaskRecord) -> Result<Uuid, RepositoryError>;

    /// 局部更新任务
    ///
    /// 任务不存在时返回 [`RepositoryError::NotFound`]。
    async fn update(&self, id: Uuid, patch: &TaskPatch) -> Result<(), RepositoryError>;

    /// 仅当任务仍处于指定状态时删除
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 已删除
    /// * `Ok(false)` - 任务不存在或状态已变化，未删除
    async fn delete_if_status(&self, id: Uuid, status: TaskStatus)
        -> Result<bool, RepositoryError>;

    /// 根据ID查找任务
    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredTask>, RepositoryError>;
}
