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
                    .table(RoomInvitation::Table)
                    .if_not_exists()
                    .col(string(RoomInvitation::Id).primary_key())
                    .col(string(RoomInvitation::RoomId))
                    .col(string(RoomInvitation::InviterId))
                    .col(string(RoomInvitation::InviteeId))
                    .col(string_len(RoomInvitation::Status, 16).default("pending"))
                    .col(timestamp(RoomInvitation::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_invitation_room_id")
                            .from(RoomInvitation::Table, RoomInvitation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_invitation_inviter_id")
                            .from(RoomInvitation::Table, RoomInvitation::InviterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_invitation_invitee_id")
                            .from(RoomInvitation::Table, RoomInvitation::InviteeId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups by (room, invitee, status) back the duplicate pending check
        manager
            .create_index(
                Index::create()
                    .name("idx_room_invitation_room_invitee_status")
                    .table(RoomInvitation::Table)
                    .col(RoomInvitation::RoomId)
                    .col(RoomInvitation::InviteeId)
                    .col(RoomInvitation::Status)
                    .to_owned(),
            )
            .await?;

        // At most one pending invitation per (room, invitee)
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX uq_room_invitation_pending \
                 ON room_invitation (room_id, invitee_id) WHERE status = 'pending'",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomInvitation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomInvitation {
    Table,
    Id,
    RoomId,
    InviterId,
    InviteeId,
    Status,
    CreatedAt,
}
