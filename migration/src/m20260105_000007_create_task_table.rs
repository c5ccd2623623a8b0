use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_room_table::Room;
use super::m20260105_000006_create_board_column_table::BoardColumn;

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
                    .col(string(Task::Id).primary_key())
                    .col(string(Task::RoomId))
                    .col(string(Task::ColumnId))
                    .col(string(Task::Text))
                    .col(text(Task::Description).default(""))
                    .col(string_null(Task::StartDate))
                    .col(string_null(Task::EndDate))
                    .col(text(Task::TaskLists).default("[]"))
                    .col(boolean(Task::Completed).default(false))
                    .col(timestamp(Task::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_room_id")
                            .from(Task::Table, Task::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_column_id")
                            .from(Task::Table, Task::ColumnId)
                            .to(BoardColumn::Table, BoardColumn::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
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
pub enum Task {
    Table,
    Id,
    RoomId,
    ColumnId,
    Text,
    Description,
    StartDate,
    EndDate,
    TaskLists,
    Completed,
    CreatedAt,
}
