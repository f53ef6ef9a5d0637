// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// Redis客户端，作为作业队列的传输层
pub mod redis_client;
