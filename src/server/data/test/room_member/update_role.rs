use super::*;

/// Tests promoting a member to admin.
///
/// Expected: Ok(true) and the role is stored lowercase
#[tokio::test]
async fn promotes_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let room_id = factory::parse_id(&roster.room.id);
    let member_id = factory::parse_id(&roster.member.id);

    let repo = RoomMemberRepository::new(db);
    let updated = repo.update_role(room_id, member_id, RoomRole::Admin).await?;

    assert!(updated);
    assert_eq!(
        repo.find(room_id, member_id).await?.map(|m| m.role),
        Some(RoomRole::Admin)
    );

    Ok(())
}

/// Tests updating the role of a user who is not a member.
///
/// Expected: Ok(false) and no membership created
#[tokio::test]
async fn returns_false_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let outsider = factory::user::create_user(db).await?;
    let room_id = factory::parse_id(&roster.room.id);
    let outsider_id = factory::parse_id(&outsider.id);

    let repo = RoomMemberRepository::new(db);
    let updated = repo.update_role(room_id, outsider_id, RoomRole::Admin).await?;

    assert!(!updated);
    assert!(repo.find(room_id, outsider_id).await?.is_none());

    Ok(())
}
