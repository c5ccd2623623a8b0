use super::*;
use crate::server::{data::is_unique_violation, model::invitation::CreateInvitationParams};
use migration::{Migrator, MigratorTrait};

/// Tests that a pending invitation is created only while none is pending.
///
/// Expected: Ok(Some) first, Ok(None) for the same pair, Ok(Some) after a rejection
#[tokio::test]
async fn creates_only_one_pending_invitation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let invitee = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let params = CreateInvitationParams {
        room_id: factory::parse_id(&room.id),
        inviter_id: factory::parse_id(&owner.id),
        invitee_id: factory::parse_id(&invitee.id),
    };

    let repo = RoomInvitationRepository::new(db);

    let first = repo.create_pending(params.clone()).await?;
    assert!(first.is_some());
    assert!(repo.create_pending(params.clone()).await?.is_none());

    let first = first.unwrap();
    repo.reject(first.id, params.invitee_id).await?;

    let again = repo.create_pending(params).await?;
    assert!(again.is_some_and(|i| i.id != first.id));

    let pending = entity::prelude::RoomInvitation::find()
        .filter(entity::room_invitation::Column::Status.eq(InvitationStatus::Pending))
        .count(db)
        .await?;
    assert_eq!(pending, 1);

    Ok(())
}

/// Tests that the migrated schema refuses a second pending row for one pair.
///
/// Expected: unique violation on the second pending insert, none for a rejected row
#[tokio::test]
async fn migrated_schema_enforces_one_pending_invitation() -> Result<(), DbErr> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    let owner = factory::user::create_user(&db).await?;
    let invitee = factory::user::create_user(&db).await?;
    let room = factory::create_room_with_owner(&db, &owner.id).await?;

    factory::room_invitation::RoomInvitationFactory::new(&db, &room.id, &owner.id, &invitee.id)
        .status(InvitationStatus::Rejected)
        .build()
        .await?;
    factory::create_pending_invitation(&db, &room.id, &owner.id, &invitee.id).await?;

    let duplicate =
        factory::create_pending_invitation(&db, &room.id, &owner.id, &invitee.id).await;

    assert!(duplicate.is_err_and(|e| is_unique_violation(&e)));

    Ok(())
}
