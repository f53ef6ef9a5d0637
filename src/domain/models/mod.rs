// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了任务下发流程的核心数据结构，包括：
/// - 任务选项（options）：带类型的扫描开关与扩展字段
/// - 扫描目标（target）：分类后的IP/域名集合及分类错误
/// - 任务（task）：任务记录、类型、标签、状态与作业动作
pub mod options;
pub mod target;
pub mod task;
