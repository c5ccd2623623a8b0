use super::*;
use crate::server::data::room_member::RoomMemberRepository;

/// Tests creating a room together with its owner membership.
///
/// Verifies that the room is stored and that its creator holds the `owner` role.
///
/// Expected: Ok with the room and one owner membership
#[tokio::test]
async fn creates_room_and_owner_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let owner_id = factory::parse_id(&owner.id);

    let room = RoomRepository::new(db)
        .create_with_owner(CreateRoomParams {
            owner_id,
            name: "Studio".to_string(),
            theme: "dark".to_string(),
        })
        .await?;

    assert_eq!(room.owner_id, owner_id);
    let membership = RoomMemberRepository::new(db).find(room.id, owner_id).await?;
    assert_eq!(membership.map(|m| m.role), Some(RoomRole::Owner));
    assert_eq!(entity::prelude::RoomMember::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a failed owner insert leaves no room behind.
///
/// Uses an owner id with no user row so the membership foreign key fails.
///
/// Expected: Err and no room stored
#[tokio::test]
async fn writes_nothing_when_owner_membership_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoomRepository::new(db)
        .create_with_owner(CreateRoomParams {
            owner_id: uuid::Uuid::new_v4(),
            name: "Ghost".to_string(),
            theme: String::new(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Room::find().count(db).await?, 0);

    Ok(())
}
