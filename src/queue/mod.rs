// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 队列模块
///
/// 定义作业队列接口及其Redis实现
/// 负责把已落库的任务交给worker执行
pub mod job_queue;
pub mod redis_job_queue;
