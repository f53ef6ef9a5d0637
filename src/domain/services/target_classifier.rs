// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::target::{ClassifiedTarget, TargetError};
use crate::domain::services::target_policy::TargetPolicy;
use crate::utils::url_utils::cut_filename;
use crate::utils::validators::{is_valid_domain, parse_ip_target};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// 拆分原始目标
///
/// 转小写、去首尾空白，按逗号和空白切分，去掉空串并去重。
///
/// # 参数
///
/// * `raw` - 用户输入的原始目标
///
/// # 返回值
///
/// 去重后的目标列表（按字典序）
pub fn normalize(raw: &str) -> Vec<String> {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// 规整风险巡航目标
///
/// 不含 `://` 的条目原样保留；URL 去掉末尾文件名与查询串后保留目录前缀，
/// 因此同目录下的多个URL会合并为一条。无法解析出主机的URL被丢弃。
pub fn normalize_crawl_targets(raw: &str) -> Vec<String> {
    normalize(raw)
        .into_iter()
        .filter_map(|token| {
            if token.contains("://") {
                cut_filename(&token)
            } else {
                Some(token)
            }
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// 目标分类器
///
/// 把原始目标分成IP集合与域名集合，任何一个目标不合法都会使整次分类失败。
pub struct TargetClassifier<P: TargetPolicy> {
    policy: Arc<P>,
}

impl<P: TargetPolicy> TargetClassifier<P> {
    pub fn new(policy: Arc<P>) -> Self {
        Self { policy }
    }

    /// 分类目标
    ///
    /// 对每个目标依次判断：
    /// 1. 符合IP语法：命中黑名单则失败，否则归入IP集合
    /// 2. 命中禁止域名：失败
    /// 3. 符合域名语法：归入域名集合
    /// 4. 其他：失败
    ///
    /// # 返回值
    ///
    /// * `Ok(ClassifiedTarget)` - 全部目标合法
    /// * `Err(TargetError)` - 第一个不合法的目标
    pub fn classify(&self, raw: &str) -> Result<ClassifiedTarget, TargetError> {
        let mut classified = ClassifiedTarget::default();

        for token in normalize(raw) {
            if let Some(ip_target) = parse_ip_target(&token) {
                if self.policy.is_blacklisted_ip(&ip_target) {
                    return Err(TargetError::BlacklistedTarget(token));
                }
                classified.ips.insert(token);
            } else if self.policy.is_forbidden_domain(&token) {
                return Err(TargetError::ForbiddenTarget(token));
            } else if is_valid_domain(&token) {
                classified.domains.insert(token);
            } else {
                return Err(TargetError::InvalidTarget(token));
            }
        }

        debug!(
            ips = classified.ips.len(),
            domains = classified.domains.len(),
            "Target classified"
        );
        Ok(classified)
    }
}
