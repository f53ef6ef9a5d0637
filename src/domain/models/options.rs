// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::task::TaskBuildError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 任务选项
///
/// 已知选项使用具名字段，其余键原样保存在 `extra` 中并随任务下发，
/// 以兼容worker侧新增的开关。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskOptions {
    /// 子域名爆破
    #[serde(default)]
    pub domain_brute: bool,
    /// 备用DNS解析
    #[serde(default)]
    pub alt_dns: bool,
    /// RiskIQ 检索
    #[serde(default)]
    pub riskiq_search: bool,
    /// ARL 历史资产检索
    #[serde(default)]
    pub arl_search: bool,
    /// 风险巡航使用的PoC配置，缺省视为空列表
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poc_config: Option<Vec<Value>>,
    /// 引用已存在的结果集
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_set_id: Option<String>,
    /// 结果集中的目标数量，与 `result_set_id` 成对出现
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_set_len: Option<u64>,
    /// 未建模的其他选项
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 从选项中取出的结果集引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSetRef {
    pub id: String,
    pub len: u64,
}

impl TaskOptions {
    /// 从未经校验的JSON值构造选项
    ///
    /// # 参数
    ///
    /// * `value` - 调用方传入的选项，必须是JSON对象
    ///
    /// # 返回值
    ///
    /// * `Ok(TaskOptions)` - 解析成功
    /// * `Err(TaskBuildError::InvalidArgument)` - 不是对象或已知字段类型不符
    pub fn from_value(value: Value) -> Result<Self, TaskBuildError> {
        if !value.is_object() {
            return Err(TaskBuildError::InvalidArgument(format!(
                "{} is not a mapping",
                value
            )));
        }
        serde_json::from_value(value)
            .map_err(|e| TaskBuildError::InvalidArgument(format!("invalid options: {}", e)))
    }

    /// 关闭所有面向主机名的信息收集选项
    ///
    /// IP任务不支持子域名爆破、备用DNS和外部检索，无论调用方如何设置。
    pub fn without_hostname_enrichment(self) -> Self {
        Self {
            domain_brute: false,
            alt_dns: false,
            riskiq_search: false,
            arl_search: false,
            ..self
        }
    }

    /// PoC 数量
    pub fn poc_count(&self) -> usize {
        self.poc_config.as_ref().map_or(0, Vec::len)
    }

    /// 取出结果集引用，同时从选项中移除 `result_set_id` 与 `result_set_len`
    ///
    /// 空的 `result_set_id` 视为未设置，选项保持不变。
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(ResultSetRef))` - 选项引用了结果集
    /// * `Ok(None)` - 未引用结果集
    /// * `Err(TaskBuildError::InvalidArgument)` - 有 `result_set_id` 但缺少 `result_set_len`
    pub fn take_result_set(&mut self) -> Result<Option<ResultSetRef>, TaskBuildError> {
        let id = match self.result_set_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Ok(None),
        };
        let len = self.result_set_len.ok_or_else(|| {
            TaskBuildError::InvalidArgument(format!(
                "result_set_id {} given without result_set_len",
                id
            ))
        })?;

        self.result_set_id = None;
        self.result_set_len = None;
        Ok(Some(ResultSetRef { id, len }))
    }
}
