use super::*;

/// Tests listing the rooms a user belongs to.
///
/// Verifies that each room is returned with the user's own role and that rooms
/// the user is not a member of are excluded.
///
/// Expected: Ok with two rooms, one as owner and one as member
#[tokio::test]
async fn returns_rooms_with_caller_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let own_room = factory::create_room_with_owner(db, &roster.member.id).await?;
    let stranger = factory::user::create_user(db).await?;
    factory::create_room_with_owner(db, &stranger.id).await?;

    let rooms = RoomRepository::new(db)
        .get_for_user(factory::parse_id(&roster.member.id))
        .await?;

    assert_eq!(rooms.len(), 2);
    let role_in = |room_id: &str| {
        rooms
            .iter()
            .find(|r| r.room.id == factory::parse_id(room_id))
            .map(|r| r.role)
    };
    assert_eq!(role_in(&roster.room.id), Some(RoomRole::Member));
    assert_eq!(role_in(&own_room.id), Some(RoomRole::Owner));

    Ok(())
}

/// Tests listing rooms for a user without memberships.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let rooms = RoomRepository::new(db)
        .get_for_user(factory::parse_id(&user.id))
        .await?;

    assert!(rooms.is_empty());

    Ok(())
}
