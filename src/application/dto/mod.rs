// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义下发请求在进入领域层之前的形态
pub mod submit_task_request;
