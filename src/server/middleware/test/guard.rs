use super::*;

/// Tests the manager requirement against every role of a roster.
///
/// Verifies that owner and admin pass while a plain member is denied with the
/// member role reported.
///
/// Expected: Ok for owner and admin, Err(InsufficientRole(Member)) for member
#[tokio::test]
async fn requires_manager_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let ctx = room_context(None, Some(&roster.room.id), None, None);
    let guard = AccessGuard::new(db);

    let owner = guard
        .require(&ctx, factory::parse_id(&roster.owner.id), RoomRole::MANAGERS)
        .await?;
    let admin = guard
        .require(&ctx, factory::parse_id(&roster.admin.id), RoomRole::MANAGERS)
        .await?;
    let member = guard
        .require(&ctx, factory::parse_id(&roster.member.id), RoomRole::MANAGERS)
        .await;

    assert_eq!(owner.role, RoomRole::Owner);
    assert_eq!(admin.role, RoomRole::Admin);
    assert!(matches!(
        member,
        Err(AppError::AccessErr(AccessError::InsufficientRole(RoomRole::Member)))
    ));

    Ok(())
}

/// Tests that a role stored in upper case still satisfies the requirement.
///
/// Expected: Ok with the admin role
#[tokio::test]
async fn accepts_stored_role_in_any_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let admin = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    factory::create_member(db, &room.id, &admin.id, "Admin").await?;

    let access = AccessGuard::new(db)
        .require_in_room(
            factory::parse_id(&room.id),
            factory::parse_id(&admin.id),
            RoomRole::MANAGERS,
        )
        .await?;

    assert_eq!(access.role, RoomRole::Admin);

    Ok(())
}

/// Tests that resolver failures reach the caller unchanged.
///
/// Expected: Err(NotAMember) rather than a role error
#[tokio::test]
async fn propagates_resolver_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let outsider = factory::user::create_user(db).await?;

    let ctx = room_context(Some(&roster.room.id), None, None, None);
    let result = AccessGuard::new(db)
        .require(&ctx, factory::parse_id(&outsider.id), RoomRole::ANY)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AccessErr(AccessError::NotAMember))
    ));

    Ok(())
}
