use super::*;

/// Tests detection of a pending invitation for the same room and invitee.
///
/// Expected: true while pending, false once rejected
#[tokio::test]
async fn only_pending_invitations_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let invitee = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let invitation = factory::create_pending_invitation(db, &room.id, &owner.id, &invitee.id).await?;
    let room_id = factory::parse_id(&room.id);
    let invitee_id = factory::parse_id(&invitee.id);

    let repo = RoomInvitationRepository::new(db);
    assert!(repo.pending_exists(room_id, invitee_id).await?);

    repo.reject(factory::parse_id(&invitation.id), invitee_id).await?;

    assert!(!repo.pending_exists(room_id, invitee_id).await?);

    Ok(())
}
