// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::options::TaskOptions;
use crate::domain::models::task::{TaskBuildError, TaskRecord, TaskTag, TaskTarget, TaskType};

/// 任务构建器
///
/// 把已校验的目标和任务元数据转换为等待中的任务记录。构建过程是纯函数，
/// 调用方的选项不会被修改。
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskBuilder;

impl TaskBuilder {
    pub fn new() -> Self {
        Self
    }

    /// 构建任务记录
    ///
    /// # 参数
    ///
    /// * `name` - 任务名
    /// * `target` - 目标；风险巡航任务为条目列表
    /// * `task_type` - 任务类型，只接受IP、域名和风险巡航
    /// * `tag` - 任务标签
    /// * `options` - 调用方选项，构建时复制一份再按类型覆盖
    ///
    /// # 返回值
    ///
    /// * `Ok(TaskRecord)` - 等待中的任务记录
    /// * `Err(TaskBuildError::InvalidArgument)` - 任务类型不支持或结果集参数不完整
    pub fn build(
        &self,
        name: &str,
        target: TaskTarget,
        task_type: TaskType,
        tag: TaskTag,
        options: &TaskOptions,
    ) -> Result<TaskRecord, TaskBuildError> {
        if !matches!(
            task_type,
            TaskType::Ip | TaskType::Domain | TaskType::RiskCruising
        ) {
            return Err(TaskBuildError::InvalidArgument(format!(
                "{} is not a valid task_type",
                task_type
            )));
        }

        let mut options = options.clone();
        if task_type == TaskType::Ip {
            options = options.without_hostname_enrichment();
        }

        if tag != TaskTag::RiskCruising {
            return Ok(TaskRecord::waiting(
                name,
                target.to_display(),
                task_type,
                tag,
                options,
            ));
        }

        let poc_count = options.poc_count();
        let result_set = options.take_result_set()?;
        let mut record = TaskRecord::waiting(name, String::new(), task_type, tag, options);

        match result_set {
            Some(result_set) => {
                record.set_display_target(display_target(result_set.len, poc_count));
                record.set_result_set_id(result_set.id);
            }
            None => {
                record.set_display_target(display_target(target.len() as u64, poc_count));
                record.set_cruising_target(target.into_items());
            }
        }

        Ok(record)
    }
}

fn display_target(target_count: u64, poc_count: usize) -> String {
    format!("target count = {}, PoC count = {}", target_count, poc_count)
}
