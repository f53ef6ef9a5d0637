// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::task::{StoredTask, TaskBuildError, TaskPatch, TaskRecord, TaskStatus};
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use crate::infrastructure::database::entities::task as task_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 任务仓库实现
///
/// 基于SeaORM实现的任务数据访问层
#[derive(Clone)]
pub struct TaskRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryImpl {
    /// 创建新的任务仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_active_model(
    id: Uuid,
    record: &TaskRecord,
) -> Result<task_entity::ActiveModel, RepositoryError> {
    let cruising_target = record
        .cruising_target()
        .map(serde_json::to_value)
        .transpose()?;

    Ok(task_entity::ActiveModel {
        id: Set(id),
        name: Set(record.name().to_string()),
        target: Set(record.target().to_string()),
        start_time: Set(record.start_time().to_string()),
        end_time: Set(record.end_time().to_string()),
        status: Set(record.status().to_string()),
        task_type: Set(record.task_type().to_string()),
        task_tag: Set(record.tag().to_string()),
        options: Set(serde_json::to_value(record.options())?),
        service: Set(serde_json::to_value(record.service())?),
        job_id: Set(record.job_id().to_string()),
        result_set_id: Set(record.result_set_id().map(str::to_string)),
        cruising_target: Set(cruising_target),
        created_at: Set(Utc::now().into()),
    })
}

impl TryFrom<task_entity::Model> for StoredTask {
    type Error = RepositoryError;

    fn try_from(model: task_entity::Model) -> Result<Self, Self::Error> {
        let id = model.id;
        let invalid =
            |e: TaskBuildError| RepositoryError::InvalidData(format!("task {}: {}", id, e));

        let record = TaskRecord::from_parts(
            model.name,
            model.target,
            model.start_time,
            model.status.parse().map_err(invalid)?,
            model.task_type.parse().map_err(invalid)?,
            model.task_tag.parse().map_err(invalid)?,
            serde_json::from_value(model.options)?,
            model.end_time,
            serde_json::from_value(model.service)?,
            model.job_id,
            model.result_set_id,
            model.cruising_target.map(serde_json::from_value).transpose()?,
        );

        Ok(StoredTask::new(id, record))
    }
}

#[async_trait]
impl TaskRepository for TaskRepositoryImpl {
    async fn insert(&self, record: &TaskRecord) -> Result<Uuid, RepositoryError> {
        let id = Uuid::new_v4();
        let model = to_active_model(id, record)?;

        model.insert(self.db.as_ref()).await?;
        Ok(id)
    }

    async fn update(&self, id: Uuid, patch: &TaskPatch) -> Result<(), RepositoryError> {
        let Some(job_id) = patch.job_id.as_ref() else {
            return match self.find_by_id(id).await? {
                Some(_) => Ok(()),
                None => Err(RepositoryError::NotFound),
            };
        };

        let result = task_entity::Entity::update_many()
            .col_expr(task_entity::Column::JobId, Expr::value(job_id.clone()))
            .filter(task_entity::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_if_status(
        &self,
        id: Uuid,
        status: TaskStatus,
    ) -> Result<bool, RepositoryError> {
        let result = task_entity::Entity::delete_many()
            .filter(task_entity::Column::Id.eq(id))
            .filter(task_entity::Column::Status.eq(status.as_str()))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredTask>, RepositoryError> {
        let model = task_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        model.map(StoredTask::try_from).transpose()
    }
}
