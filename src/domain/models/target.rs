// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeSet;
use thiserror::Error;

/// 目标分类错误
///
/// 分类是全有或全无的，任何一个目标不合法都会使整次分类失败。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// 既不是IP也不是域名
    #[error("{0} is not a valid target")]
    InvalidTarget(String),

    /// IP命中黑名单
    #[error("{0} is in the IP blacklist")]
    BlacklistedTarget(String),

    /// 域名命中禁止列表
    #[error("{0} matches a forbidden domain")]
    ForbiddenTarget(String),
}

/// 分类后的扫描目标
///
/// `ips` 与 `domains` 互不相交，均已去重并按字典序排列。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedTarget {
    pub ips: BTreeSet<String>,
    pub domains: BTreeSet<String>,
}

impl ClassifiedTarget {
    pub fn is_empty(&self) -> bool {
        self.ips.is_empty() && self.domains.is_empty()
    }

    /// 所有IP目标以空格拼接，作为IP任务的目标
    pub fn ip_target(&self) -> Option<String> {
        if self.ips.is_empty() {
            return None;
        }
        Some(self.ips.iter().cloned().collect::<Vec<_>>().join(" "))
    }
}
