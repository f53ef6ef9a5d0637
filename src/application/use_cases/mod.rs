// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 资产扫描与风险巡航两种下发流程
pub mod submit_task_use_case;
