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
                    .table(Entry::Table)
                    .if_not_exists()
                    .col(string(Entry::Id).primary_key())
                    .col(string(Entry::RoomId))
                    .col(text(Entry::Content))
                    .col(timestamp(Entry::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_room_id")
                            .from(Entry::Table, Entry::RoomId)
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
            .drop_table(Table::drop().table(Entry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Entry {
    Table,
    Id,
    RoomId,
    Content,
    CreatedAt,
}
