// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域层抽象接口的具体实现，负责与外部系统交互。
///
/// 包含的子模块：
/// - 缓存（cache）：Redis客户端
/// - 数据库（database）：数据库连接、迁移和实体映射
/// - 可观测性（observability）：指标注册
/// - 仓库实现（repositories）：SeaORM 与内存任务仓库
pub mod cache;
pub mod database;
pub mod observability;
pub mod repositories;
