// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 默认日志过滤规则，可被 `RUST_LOG` 覆盖
pub const DEFAULT_LOG_FILTER: &str = "info,arl_dispatch=debug";

/// 构建日志过滤器
///
/// 优先读取 `RUST_LOG`，读取失败时回退到 [`DEFAULT_LOG_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

/// 初始化全局日志订阅器
///
/// 只应在进程启动时调用一次，重复调用会被忽略。
pub fn init_telemetry() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
