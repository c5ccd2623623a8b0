use super::*;

/// Tests rejecting a pending invitation.
///
/// Expected: Ok(Some) with status rejected and no membership created
#[tokio::test]
async fn rejects_without_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let invitee = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let invitation = factory::create_pending_invitation(db, &room.id, &owner.id, &invitee.id).await?;

    let rejected = RoomInvitationRepository::new(db)
        .reject(factory::parse_id(&invitation.id), factory::parse_id(&invitee.id))
        .await?;

    assert_eq!(rejected.map(|i| i.status), Some(InvitationStatus::Rejected));
    let is_member = RoomMemberRepository::new(db)
        .is_member(factory::parse_id(&room.id), factory::parse_id(&invitee.id))
        .await?;
    assert!(!is_member);

    Ok(())
}

/// Tests that a decided invitation is never reopened.
///
/// Expected: Ok(None) when rejecting or accepting an already rejected invitation
#[tokio::test]
async fn terminal_state_is_final() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let invitee = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let invitation = factory::room_invitation::RoomInvitationFactory::new(
        db,
        &room.id,
        &owner.id,
        &invitee.id,
    )
    .status(InvitationStatus::Rejected)
    .build()
    .await?;
    let invitation_id = factory::parse_id(&invitation.id);
    let invitee_id = factory::parse_id(&invitee.id);

    let repo = RoomInvitationRepository::new(db);

    assert!(repo.reject(invitation_id, invitee_id).await?.is_none());
    assert!(repo.accept(invitation_id, invitee_id).await?.is_none());

    Ok(())
}
