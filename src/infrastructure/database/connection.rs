// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::DatabaseSettings;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::{debug, info};

fn connect_options(settings: &DatabaseSettings) -> ConnectOptions {
    let mut opt = ConnectOptions::new(settings.url.to_owned());

    if let Some(max) = settings.max_connections {
        opt.max_connections(max);
    }
    if let Some(min) = settings.min_connections {
        opt.min_connections(min);
    }
    if let Some(timeout) = settings.connect_timeout {
        opt.connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout));
    }
    if let Some(idle) = settings.idle_timeout {
        opt.idle_timeout(Duration::from_secs(idle));
    }

    opt.sqlx_logging(true);
    opt
}

/// 连接任务库并应用迁移
///
/// # 参数
///
/// * `settings` - 数据库配置
///
/// # 返回值
///
/// * `Ok(DatabaseConnection)` - 已完成迁移的数据库连接
/// * `Err(DbErr)` - 连接或迁移失败
pub async fn connect(settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(connect_options(settings)).await?;
    debug!("Database connection established");

    Migrator::up(&db, None).await?;
    info!("Database migrations applied");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::entities::task as task_entity;
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn test_connect_runs_migrations() {
        let settings = DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
            min_connections: Some(1),
            connect_timeout: Some(5),
            idle_timeout: None,
        };

        let db = connect(&settings).await.unwrap();
        let count = task_entity::Entity::find().count(&db).await.unwrap();
        assert_eq!(count, 0);
    }
}
