// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::PolicySettings;
use crate::utils::validators::IpTarget;
use ipnetwork::Ipv4Network;
use tracing::warn;

/// 目标策略特质
///
/// 黑名单IP与禁止域名判断，均为纯函数，不做任何I/O。
pub trait TargetPolicy: Send + Sync {
    /// IP类目标是否与黑名单有交集
    fn is_blacklisted_ip(&self, target: &IpTarget) -> bool;

    /// 域名是否等于或从属于禁止域名
    fn is_forbidden_domain(&self, domain: &str) -> bool;
}

/// 基于配置的静态目标策略
#[derive(Debug, Clone, Default)]
pub struct StaticTargetPolicy {
    black_networks: Vec<Ipv4Network>,
    forbidden_domains: Vec<String>,
}

impl StaticTargetPolicy {
    /// 创建策略实例
    ///
    /// # 参数
    ///
    /// * `black_networks` - 黑名单网段
    /// * `forbidden_domains` - 禁止域名，匹配时忽略大小写与首尾的点
    pub fn new(black_networks: Vec<Ipv4Network>, forbidden_domains: Vec<String>) -> Self {
        let forbidden_domains = forbidden_domains
            .into_iter()
            .map(|domain| domain.trim().trim_matches('.').to_lowercase())
            .filter(|domain| !domain.is_empty())
            .collect();
        Self {
            black_networks,
            forbidden_domains,
        }
    }

    /// 从配置构建策略
    ///
    /// 无法解析的黑名单条目会被跳过并记录警告。
    pub fn from_settings(settings: &PolicySettings) -> Self {
        let black_networks = settings
            .black_ips
            .iter()
            .filter_map(|entry| match entry.trim().parse::<Ipv4Network>() {
                Ok(network) => Some(network),
                Err(e) => {
                    warn!(entry = %entry, error = %e, "Ignoring malformed blacklist entry");
                    None
                }
            })
            .collect();
        Self::new(black_networks, settings.forbidden_domains.clone())
    }
}

impl TargetPolicy for StaticTargetPolicy {
    fn is_blacklisted_ip(&self, target: &IpTarget) -> bool {
        self.black_networks
            .iter()
            .any(|network| target.overlaps(network))
    }

    fn is_forbidden_domain(&self, domain: &str) -> bool {
        self.forbidden_domains.iter().any(|forbidden| {
            domain == forbidden
                || domain
                    .strip_suffix(forbidden.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}
