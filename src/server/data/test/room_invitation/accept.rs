use super::*;

/// Tests accepting a pending invitation.
///
/// Verifies that the invitation becomes accepted and the invitee becomes a member.
///
/// Expected: Ok(Some) with status accepted and a `member` membership
#[tokio::test]
async fn accepts_and_adds_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let invitee = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let invitation = factory::create_pending_invitation(db, &room.id, &owner.id, &invitee.id).await?;
    let invitee_id = factory::parse_id(&invitee.id);

    let accepted = RoomInvitationRepository::new(db)
        .accept(factory::parse_id(&invitation.id), invitee_id)
        .await?;

    assert_eq!(accepted.map(|i| i.status), Some(InvitationStatus::Accepted));
    let membership = RoomMemberRepository::new(db)
        .find(factory::parse_id(&room.id), invitee_id)
        .await?;
    assert_eq!(membership.map(|m| m.role), Some(RoomRole::Member));

    Ok(())
}

/// Tests accepting the same invitation twice.
///
/// Verifies that the conditional status update lets only the first call through and
/// that exactly one membership row exists afterwards.
///
/// Expected: Ok(None) on the second call and a single membership
#[tokio::test]
async fn second_accept_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let invitee = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let invitation = factory::create_pending_invitation(db, &room.id, &owner.id, &invitee.id).await?;
    let invitation_id = factory::parse_id(&invitation.id);
    let invitee_id = factory::parse_id(&invitee.id);

    let repo = RoomInvitationRepository::new(db);
    assert!(repo.accept(invitation_id, invitee_id).await?.is_some());
    assert!(repo.accept(invitation_id, invitee_id).await?.is_none());

    let memberships = entity::prelude::RoomMember::find()
        .filter(entity::room_member::Column::UserId.eq(invitee.id.as_str()))
        .count(db)
        .await?;
    assert_eq!(memberships, 1);

    Ok(())
}

/// Tests that only the invitee can accept.
///
/// Expected: Ok(None) and the invitation stays pending
#[tokio::test]
async fn ignores_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let invitee = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let invitation = factory::create_pending_invitation(db, &room.id, &owner.id, &invitee.id).await?;

    let repo = RoomInvitationRepository::new(db);
    let result = repo
        .accept(factory::parse_id(&invitation.id), factory::parse_id(&intruder.id))
        .await?;

    assert!(result.is_none());
    let stored = repo.find_by_id(factory::parse_id(&invitation.id)).await?;
    assert_eq!(stored.map(|i| i.status), Some(InvitationStatus::Pending));

    Ok(())
}

/// Tests accepting when the invitee already joined by another path.
///
/// Expected: Ok(Some) and still exactly one membership for the invitee
#[tokio::test]
async fn does_not_duplicate_existing_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let invitee = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let invitation = factory::create_pending_invitation(db, &room.id, &owner.id, &invitee.id).await?;
    factory::create_member(db, &room.id, &invitee.id, "admin").await?;

    let result = RoomInvitationRepository::new(db)
        .accept(factory::parse_id(&invitation.id), factory::parse_id(&invitee.id))
        .await?;

    assert!(result.is_some());
    let membership = RoomMemberRepository::new(db)
        .find(factory::parse_id(&room.id), factory::parse_id(&invitee.id))
        .await?;
    assert_eq!(membership.map(|m| m.role), Some(RoomRole::Admin));

    Ok(())
}
