use super::*;

/// Tests renaming a column.
///
/// Expected: Ok(Some) with the new title
#[tokio::test]
async fn renames_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let column = factory::create_column(db, &room.id).await?;

    let updated = BoardColumnRepository::new(db)
        .update_title(factory::parse_id(&column.id), "Done".to_string())
        .await?;

    assert_eq!(updated.map(|c| c.title), Some("Done".to_string()));

    Ok(())
}

/// Tests renaming a column that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = BoardColumnRepository::new(db)
        .update_title(uuid::Uuid::new_v4(), "Done".to_string())
        .await?;

    assert!(updated.is_none());

    Ok(())
}
