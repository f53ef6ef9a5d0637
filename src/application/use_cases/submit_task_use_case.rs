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

use crate::{
    application::dto::submit_task_request::{SubmitMode, SubmitTaskRequestDto},
    domain::{
        models::{
            options::TaskOptions,
            target::TargetError,
            task::{StoredTask, TaskBuildError, TaskTag, TaskTarget, TaskType},
        },
        repositories::task_repository::TaskRepository,
        services::{
            target_classifier::{normalize, normalize_crawl_targets, TargetClassifier},
            target_policy::TargetPolicy,
            task_builder::TaskBuilder,
            task_submitter::{SubmitError, TaskSubmitter},
        },
    },
    queue::job_queue::JobQueue,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use validator::Validate;

#[derive(Error, Debug)]
pub enum SubmitTaskError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Target(#[from] TargetError),
    #[error(transparent)]
    Build(#[from] TaskBuildError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// 批量下发中途失败
///
/// `submitted` 为失败之前已经成功下发的任务，它们不会被撤销；
/// 失败之后的任务不再尝试。
#[derive(Error, Debug)]
#[error("{error} ({count} task(s) submitted before the failure)", count = .submitted.len())]
pub struct BatchSubmitError {
    pub submitted: Vec<StoredTask>,
    #[source]
    pub error: SubmitTaskError,
}

impl From<SubmitTaskError> for BatchSubmitError {
    fn from(error: SubmitTaskError) -> Self {
        Self {
            submitted: Vec::new(),
            error,
        }
    }
}

pub struct SubmitTaskUseCase<P, R, Q>
where
    P: TargetPolicy,
    R: TaskRepository,
    Q: JobQueue,
{
    classifier: TargetClassifier<P>,
    builder: TaskBuilder,
    submitter: TaskSubmitter<R, Q>,
}

impl<P, R, Q> SubmitTaskUseCase<P, R, Q>
where
    P: TargetPolicy + 'static,
    R: TaskRepository + 'static,
    Q: JobQueue + 'static,
{
    pub fn new(policy: Arc<P>, repository: Arc<R>, queue: Arc<Q>) -> Self {
        Self {
            classifier: TargetClassifier::new(policy),
            builder: TaskBuilder::new(),
            submitter: TaskSubmitter::new(repository, queue),
        }
    }

    /// 处理下发请求
    ///
    /// 校验请求、解析选项后按下发方式分派到 [`Self::submit_direct`]
    /// 或 [`Self::submit_crawl`]。
    pub async fn execute(
        &self,
        dto: SubmitTaskRequestDto,
    ) -> Result<Vec<StoredTask>, BatchSubmitError> {
        dto.validate()
            .map_err(|e| SubmitTaskError::Validation(e.to_string()))?;

        if normalize(&dto.target).is_empty() {
            return Err(SubmitTaskError::Validation("target is empty".to_string()).into());
        }

        let options = TaskOptions::from_value(dto.options.unwrap_or_else(|| json!({})))
            .map_err(SubmitTaskError::from)?;

        match dto.mode {
            SubmitMode::Direct => self.submit_direct(&dto.target, &dto.name, &options).await,
            SubmitMode::RiskCruising => Ok(self
                .submit_crawl(&dto.target, &dto.name, &options)
                .await?),
        }
    }

    /// 资产扫描下发
    ///
    /// 所有IP合并为一个IP任务，每个域名各一个域名任务，按顺序逐个下发。
    ///
    /// # 参数
    ///
    /// * `target` - 原始目标
    /// * `name` - 任务名
    /// * `options` - 任务选项
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<StoredTask>)` - 全部下发成功
    /// * `Err(BatchSubmitError)` - 第一个失败的错误，以及此前已下发的任务
    pub async fn submit_direct(
        &self,
        target: &str,
        name: &str,
        options: &TaskOptions,
    ) -> Result<Vec<StoredTask>, BatchSubmitError> {
        let classified = self.classifier.classify(target).map_err(SubmitTaskError::from)?;

        let mut plan = Vec::with_capacity(classified.domains.len() + 1);
        if let Some(ip_target) = classified.ip_target() {
            plan.push((TaskTarget::from(ip_target), TaskType::Ip));
        }
        for domain in classified.domains {
            plan.push((TaskTarget::from(domain), TaskType::Domain));
        }

        info!(name = %name, tasks = plan.len(), "Submitting direct tasks");

        let mut submitted = Vec::with_capacity(plan.len());
        for (task_target, task_type) in plan {
            match self.submit_one(name, task_target, task_type, TaskTag::Task, options).await {
                Ok(stored) => submitted.push(stored),
                Err(error) => {
                    warn!(
                        name = %name,
                        submitted = submitted.len(),
                        error = %error,
                        "Direct submission aborted"
                    );
                    return Err(BatchSubmitError { submitted, error });
                }
            }
        }

        Ok(submitted)
    }

    /// 风险巡航下发
    ///
    /// 目标规整后作为单个风险巡航任务下发，返回值恰好包含一个任务。
    pub async fn submit_crawl(
        &self,
        target: &str,
        name: &str,
        options: &TaskOptions,
    ) -> Result<Vec<StoredTask>, SubmitTaskError> {
        let items = normalize_crawl_targets(target);
        info!(name = %name, items = items.len(), "Submitting risk cruising task");

        let stored = self
            .submit_one(
                name,
                TaskTarget::Items(items),
                TaskType::RiskCruising,
                TaskTag::RiskCruising,
                options,
            )
            .await?;
        Ok(vec![stored])
    }

    async fn submit_one(
        &self,
        name: &str,
        target: TaskTarget,
        task_type: TaskType,
        tag: TaskTag,
        options: &TaskOptions,
    ) -> Result<StoredTask, SubmitTaskError> {
        let record = self.builder.build(name, target, task_type, tag, options)?;
        Ok(self.submitter.submit(record).await?)
    }
}
