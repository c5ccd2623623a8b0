use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;
use super::m20260105_000002_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomMember::Table)
                    .if_not_exists()
                    .col(string(RoomMember::Id).primary_key())
                    .col(string(RoomMember::RoomId))
                    .col(string(RoomMember::UserId))
                    .col(string_len(RoomMember::Role, 16).default("member"))
                    .col(timestamp(RoomMember::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_member_room_id")
                            .from(RoomMember::Table, RoomMember::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_member_user_id")
                            .from(RoomMember::Table, RoomMember::UserId)
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
                    .name("idx_room_member_room_user")
                    .table(RoomMember::Table)
                    .col(RoomMember::RoomId)
                    .col(RoomMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomMember {
    Table,
    Id,
    RoomId,
    UserId,
    Role,
    CreatedAt,
}
