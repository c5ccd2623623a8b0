use super::*;

/// Tests selecting the members out of a candidate list.
///
/// Expected: Ok with only the ids that hold a membership in the room
#[tokio::test]
async fn keeps_only_room_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let outsider = factory::user::create_user(db).await?;
    let member_id = factory::parse_id(&roster.member.id);
    let admin_id = factory::parse_id(&roster.admin.id);

    let members = RoomMemberRepository::new(db)
        .filter_members(
            factory::parse_id(&roster.room.id),
            &[member_id, admin_id, factory::parse_id(&outsider.id)],
        )
        .await?;

    assert_eq!(members.len(), 2);
    assert!(members.contains(&member_id));
    assert!(members.contains(&admin_id));

    Ok(())
}
