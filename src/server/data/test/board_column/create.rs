use super::*;

/// Tests creating a column and listing it back by room.
///
/// Expected: Ok with the column present in the room's list
#[tokio::test]
async fn creates_column_in_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let room_id = factory::parse_id(&room.id);

    let repo = BoardColumnRepository::new(db);
    let column = repo
        .create(CreateColumnParams {
            room_id,
            title: "Backlog".to_string(),
        })
        .await?;

    assert_eq!(column.room_id, room_id);
    assert_eq!(repo.get_by_room(room_id).await?, vec![column]);

    Ok(())
}
