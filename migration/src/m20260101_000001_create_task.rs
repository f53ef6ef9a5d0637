// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Task::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Task::Name).string().not_null())
                    .col(ColumnDef::new(Task::Target).text().not_null())
                    .col(ColumnDef::new(Task::StartTime).string().not_null())
                    .col(ColumnDef::new(Task::EndTime).string().not_null())
                    .col(ColumnDef::new(Task::Status).string().not_null())
                    .col(ColumnDef::new(Task::TaskType).string().not_null())
                    .col(ColumnDef::new(Task::TaskTag).string().not_null())
                    .col(ColumnDef::new(Task::Options).json().not_null())
                    .col(ColumnDef::new(Task::Service).json().not_null())
                    .col(
                        ColumnDef::new(Task::JobId)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Task::ResultSetId).string())
                    .col(ColumnDef::new(Task::CruisingTarget).json())
                    .col(
                        ColumnDef::new(Task::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // workers poll waiting tasks by status
        manager
            .create_index(
                Index::create()
                    .name("idx_task_status")
                    .table(Task::Table)
                    .col(Task::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Task {
    Table,
    Id,
    Name,
    Target,
    StartTime,
    EndTime,
    Status,
    TaskType,
    TaskTag,
    Options,
    Service,
    JobId,
    ResultSetId,
    CruisingTarget,
    CreatedAt,
}
