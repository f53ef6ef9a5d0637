// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 任务下发的核心业务逻辑：
/// - 目标策略（target_policy）：黑名单IP与禁止域名判断
/// - 目标分类（target_classifier）：拆分、规整并分类原始目标
/// - 任务构建（task_builder）：按任务类型生成等待中的任务记录
/// - 任务下发（task_submitter）：落库、入队，失败时撤销
pub mod target_classifier;
pub mod target_policy;
pub mod task_builder;
pub mod task_submitter;
