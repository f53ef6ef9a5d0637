// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 可观测性模块
///
/// 任务下发相关的指标名称与描述
pub mod metrics;
