// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Result;
use redis::AsyncCommands;

/// Redis客户端
///
/// 提供对Redis数据库的异步操作接口
#[derive(Clone)]
pub struct RedisClient {
    /// Redis客户端
    client: redis::Client,
}

impl RedisClient {
    /// 创建新的Redis客户端实例
    ///
    /// # 参数
    ///
    /// * `redis_url` - Redis连接URL
    ///
    /// # 返回值
    ///
    /// * `Ok(RedisClient)` - Redis客户端实例
    /// * `Err(anyhow::Error)` - URL无法解析
    pub fn new(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self { client })
    }

    /// 检查连接是否可用
    pub async fn ping(&self) -> Result<()> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut con).await?;
        Ok(())
    }

    /// 将值推入列表头部
    ///
    /// # 参数
    ///
    /// * `key` - 列表键
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(u64)` - 推入后的列表长度
    /// * `Err(anyhow::Error)` - 推入过程中出现的错误
    pub async fn lpush(&self, key: &str, value: &str) -> Result<u64> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let len: u64 = con.lpush(key, value).await?;
        Ok(len)
    }
}
