// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含任务下发的核心业务逻辑，包括：
/// - 领域模型（models）：任务记录、选项与扫描目标
/// - 仓库接口（repositories）：任务持久化抽象接口
/// - 服务（services）：目标分类、任务构建与下发
///
/// 领域层只依赖仓库与队列的抽象接口，不依赖任何具体实现。
pub mod models;
pub mod repositories;
pub mod services;
