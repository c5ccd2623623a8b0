use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardColumn::Table)
                    .if_not_exists()
                    .col(string(BoardColumn::Id).primary_key())
                    .col(string(BoardColumn::RoomId))
                    .col(string(BoardColumn::Title))
                    .col(timestamp(BoardColumn::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_column_room_id")
                            .from(BoardColumn::Table, BoardColumn::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardColumn::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardColumn {
    Table,
    Id,
    RoomId,
    Title,
    CreatedAt,
}
