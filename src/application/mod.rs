// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 把下发请求编排为领域服务调用：校验请求、分类目标、构建并下发任务
pub mod dto;
pub mod use_cases;
