use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Friendship::Table)
                    .if_not_exists()
                    .col(string(Friendship::Id).primary_key())
                    .col(string(Friendship::RequesterId))
                    .col(string(Friendship::TargetId))
                    .col(string_len(Friendship::Status, 16).default("pending"))
                    .col(timestamp(Friendship::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friendship_requester_id")
                            .from(Friendship::Table, Friendship::RequesterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friendship_target_id")
                            .from(Friendship::Table, Friendship::TargetId)
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
                    .name("idx_friendship_target_status")
                    .table(Friendship::Table)
                    .col(Friendship::TargetId)
                    .col(Friendship::Status)
                    .to_owned(),
            )
            .await?;

        // One record per unordered pair of users, whichever side sent it
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX uq_friendship_pair \
                 ON friendship (min(requester_id, target_id), max(requester_id, target_id))",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Friendship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Friendship {
    Table,
    Id,
    RequesterId,
    TargetId,
    Status,
    CreatedAt,
}
