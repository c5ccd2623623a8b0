use super::*;

/// Tests that stored roles are read case-insensitively.
///
/// Verifies that a role stored as `"ADMIN"` is still recognized as `RoomRole::Admin`.
///
/// Expected: Ok(Some) with the admin role
#[tokio::test]
async fn parses_stored_role_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let admin = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    factory::create_member(db, &room.id, &admin.id, "ADMIN").await?;

    let member = RoomMemberRepository::new(db)
        .find(factory::parse_id(&room.id), factory::parse_id(&admin.id))
        .await?;

    assert_eq!(member.map(|m| m.role), Some(RoomRole::Admin));

    Ok(())
}

/// Tests lookup for a user without membership.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let outsider = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;

    let member = RoomMemberRepository::new(db)
        .find(factory::parse_id(&room.id), factory::parse_id(&outsider.id))
        .await?;

    assert!(member.is_none());

    Ok(())
}

/// Tests that an unknown stored role surfaces as an error instead of a guess.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_for_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let guest = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    factory::create_member(db, &room.id, &guest.id, "guest").await?;

    let result = RoomMemberRepository::new(db)
        .find(factory::parse_id(&room.id), factory::parse_id(&guest.id))
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
