// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 下发请求的校验与编排
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 任务模型、仓库接口以及目标分类、任务构建与下发服务
pub mod domain;

/// 基础设施模块
///
/// 数据库、Redis与指标等外部服务集成
pub mod infrastructure;

/// 队列模块
///
/// 作业队列接口及其Redis实现
pub mod queue;

/// 工具模块
///
/// 目标语法校验、URL处理与遥测初始化
pub mod utils;
