// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::options::TaskOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// 尚未开始/结束时 `start_time`、`end_time` 的占位值
pub const TIME_PLACEHOLDER: &str = "-";

/// 任务状态枚举
///
/// 状态转换遵循以下流程：
/// Waiting → Running → Done/Failed
///
/// 提交流程只会创建 `Waiting` 状态的任务，之后的状态由worker推进。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// 等待中，任务已创建但worker尚未接手
    #[default]
    Waiting,
    /// 运行中
    Running,
    /// 已完成
    Done,
    /// 已失败
    Failed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Waiting => "waiting",
            TaskStatus::Running => "running",
            TaskStatus::Done => "done",
            TaskStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskBuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(TaskStatus::Waiting),
            "running" => Ok(TaskStatus::Running),
            "done" => Ok(TaskStatus::Done),
            "failed" => Ok(TaskStatus::Failed),
            _ => Err(TaskBuildError::InvalidArgument(format!(
                "{} is not a valid task status",
                s
            ))),
        }
    }
}

/// 任务类型枚举
///
/// 决定worker侧执行哪一种扫描流程。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// IP任务，目标为空格分隔的IP/网段
    Ip,
    /// 域名任务，目标为单个域名
    Domain,
    /// 风险巡航任务
    RiskCruising,
    /// 资产站点更新任务，只由其他子系统创建
    AssetSiteUpdate,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Ip => "ip",
            TaskType::Domain => "domain",
            TaskType::RiskCruising => "risk_cruising",
            TaskType::AssetSiteUpdate => "asset_site_update",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = TaskBuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ip" => Ok(TaskType::Ip),
            "domain" => Ok(TaskType::Domain),
            "risk_cruising" => Ok(TaskType::RiskCruising),
            "asset_site_update" => Ok(TaskType::AssetSiteUpdate),
            _ => Err(TaskBuildError::InvalidArgument(format!(
                "{} is not a valid task_type",
                s
            ))),
        }
    }
}

/// 任务标签枚举
///
/// 描述任务产生的原因，与 [`TaskType`] 相互独立。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskTag {
    /// 用户直接下发的任务
    Task,
    /// 监控任务
    Monitor,
    /// 风险巡航任务
    RiskCruising,
}

impl TaskTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskTag::Task => "task",
            TaskTag::Monitor => "monitor",
            TaskTag::RiskCruising => "risk_cruising",
        }
    }
}

impl fmt::Display for TaskTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskTag {
    type Err = TaskBuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(TaskTag::Task),
            "monitor" => Ok(TaskTag::Monitor),
            "risk_cruising" => Ok(TaskTag::RiskCruising),
            _ => Err(TaskBuildError::InvalidArgument(format!(
                "{} is not a valid task_tag",
                s
            ))),
        }
    }
}

/// worker侧的作业动作
///
/// 每种 [`TaskType`] 对应唯一的动作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobAction {
    IpTask,
    DomainTask,
    RunRiskCruising,
    AssetSiteUpdate,
}

impl JobAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobAction::IpTask => "ip_task",
            JobAction::DomainTask => "domain_task",
            JobAction::RunRiskCruising => "run_risk_cruising",
            JobAction::AssetSiteUpdate => "asset_site_update",
        }
    }
}

impl From<TaskType> for JobAction {
    fn from(task_type: TaskType) -> Self {
        match task_type {
            TaskType::Ip => JobAction::IpTask,
            TaskType::Domain => JobAction::DomainTask,
            TaskType::RiskCruising => JobAction::RunRiskCruising,
            TaskType::AssetSiteUpdate => JobAction::AssetSiteUpdate,
        }
    }
}

impl fmt::Display for JobAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 任务构建错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskBuildError {
    /// 任务类型、标签或选项不合法
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// 任务构建器的目标输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskTarget {
    /// 单个文本目标，如一个域名或空格分隔的IP列表
    Text(String),
    /// 风险巡航的目标条目列表
    Items(Vec<String>),
}

impl TaskTarget {
    /// 目标条目数
    pub fn len(&self) -> usize {
        match self {
            TaskTarget::Text(_) => 1,
            TaskTarget::Items(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 作为展示用的单个字符串
    pub fn to_display(&self) -> String {
        match self {
            TaskTarget::Text(text) => text.clone(),
            TaskTarget::Items(items) => items.join(" "),
        }
    }

    /// 展开为条目列表
    pub fn into_items(self) -> Vec<String> {
        match self {
            TaskTarget::Text(text) => vec![text],
            TaskTarget::Items(items) => items,
        }
    }
}

impl From<&str> for TaskTarget {
    fn from(value: &str) -> Self {
        TaskTarget::Text(value.to_string())
    }
}

impl From<String> for TaskTarget {
    fn from(value: String) -> Self {
        TaskTarget::Text(value)
    }
}

impl From<Vec<String>> for TaskTarget {
    fn from(value: Vec<String>) -> Self {
        TaskTarget::Items(value)
    }
}

/// 任务记录
///
/// 持久化到任务库、并随作业下发给worker的工作单元。字段命名与worker
/// 约定保持一致（`task_tag`、`celery_id`），创建后只有提交流程会写入
/// `job_id`，其余字段不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    name: String,
    target: String,
    start_time: String,
    status: TaskStatus,
    #[serde(rename = "type")]
    task_type: TaskType,
    #[serde(rename = "task_tag")]
    tag: TaskTag,
    options: TaskOptions,
    end_time: String,
    #[serde(default)]
    service: Vec<serde_json::Value>,
    #[serde(rename = "celery_id", default)]
    job_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result_set_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cruising_target: Option<Vec<String>>,
}

impl TaskRecord {
    /// 创建一个等待中的任务记录
    pub(crate) fn waiting(
        name: impl Into<String>,
        target: impl Into<String>,
        task_type: TaskType,
        tag: TaskTag,
        options: TaskOptions,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            start_time: TIME_PLACEHOLDER.to_string(),
            status: TaskStatus::Waiting,
            task_type,
            tag,
            options,
            end_time: TIME_PLACEHOLDER.to_string(),
            service: Vec::new(),
            job_id: String::new(),
            result_set_id: None,
            cruising_target: None,
        }
    }

    /// 从存储中的字段还原任务记录
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        name: String,
        target: String,
        start_time: String,
        status: TaskStatus,
        task_type: TaskType,
        tag: TaskTag,
        options: TaskOptions,
        end_time: String,
        service: Vec<serde_json::Value>,
        job_id: String,
        result_set_id: Option<String>,
        cruising_target: Option<Vec<String>>,
    ) -> Self {
        Self {
            name,
            target,
            start_time,
            status,
            task_type,
            tag,
            options,
            end_time,
            service,
            job_id,
            result_set_id,
            cruising_target,
        }
    }

    pub(crate) fn set_display_target(&mut self, target: String) {
        self.target = target;
    }

    pub(crate) fn set_result_set_id(&mut self, result_set_id: String) {
        self.result_set_id = Some(result_set_id);
    }

    pub(crate) fn set_cruising_target(&mut self, items: Vec<String>) {
        self.cruising_target = Some(items);
    }

    pub(crate) fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    pub(crate) fn set_job_id(&mut self, job_id: String) {
        self.job_id = job_id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 展示用目标；风险巡航任务为统计描述
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn task_type(&self) -> TaskType {
        self.task_type
    }

    pub fn tag(&self) -> TaskTag {
        self.tag
    }

    pub fn options(&self) -> &TaskOptions {
        &self.options
    }

    pub fn service(&self) -> &[serde_json::Value] {
        &self.service
    }

    /// 队列分配的作业ID，入队成功前为空串
    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn result_set_id(&self) -> Option<&str> {
        self.result_set_id.as_deref()
    }

    pub fn cruising_target(&self) -> Option<&[String]> {
        self.cruising_target.as_deref()
    }
}

/// 已落库的任务
///
/// 在 [`TaskRecord`] 的基础上附带存储分配的 `task_id`，序列化时字段平铺。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTask {
    pub task_id: Uuid,
    #[serde(flatten)]
    pub record: TaskRecord,
}

impl StoredTask {
    pub fn new(task_id: Uuid, record: TaskRecord) -> Self {
        Self { task_id, record }
    }

    pub(crate) fn with_job_id(mut self, job_id: String) -> Self {
        self.record.set_job_id(job_id);
        self
    }
}

/// 任务局部更新
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub job_id: Option<String>,
}

impl TaskPatch {
    pub fn job_id(job_id: impl Into<String>) -> Self {
        Self {
            job_id: Some(job_id.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.job_id.is_none()
    }
}
