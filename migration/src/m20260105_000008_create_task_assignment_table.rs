use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;
use super::m20260105_000007_create_task_table::Task;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskAssignment::Table)
                    .if_not_exists()
                    .col(string(TaskAssignment::Id).primary_key())
                    .col(string(TaskAssignment::TaskId))
                    .col(string(TaskAssignment::UserId))
                    .col(timestamp(TaskAssignment::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_assignment_task_id")
                            .from(TaskAssignment::Table, TaskAssignment::TaskId)
                            .to(Task::Table, Task::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_assignment_user_id")
                            .from(TaskAssignment::Table, TaskAssignment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_task_assignment_task_user")
                    .table(TaskAssignment::Table)
                    .col(TaskAssignment::TaskId)
                    .col(TaskAssignment::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TaskAssignment {
    Table,
    Id,
    TaskId,
    UserId,
    CreatedAt,
}
