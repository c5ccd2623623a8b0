use super::*;

/// Tests the enriched pending invitation listing.
///
/// Verifies that only pending invitations addressed to the user are returned and that
/// each carries the room name and the inviter's display name.
///
/// Expected: Ok with one enriched invitation
#[tokio::test]
async fn returns_pending_with_room_and_inviter_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db).name("Olivia").build().await?;
    let invitee = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let room = factory::room::RoomFactory::new(db, &owner.id)
        .name("Design")
        .build()
        .await?;
    let declined_room = factory::create_room_with_owner(db, &owner.id).await?;

    let pending = factory::create_pending_invitation(db, &room.id, &owner.id, &invitee.id).await?;
    factory::create_pending_invitation(db, &room.id, &owner.id, &other.id).await?;
    factory::room_invitation::RoomInvitationFactory::new(db, &declined_room.id, &owner.id, &invitee.id)
        .status(InvitationStatus::Rejected)
        .build()
        .await?;

    let result = RoomInvitationRepository::new(db)
        .get_pending_for_user(factory::parse_id(&invitee.id))
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, factory::parse_id(&pending.id));
    assert_eq!(result[0].room_name, "Design");
    assert_eq!(result[0].inviter_name, "Olivia");

    Ok(())
}
