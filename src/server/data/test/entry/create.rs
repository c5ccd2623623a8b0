use super::*;

/// Tests posting an entry and listing it by room.
///
/// Expected: Ok with the entry listed for its room only
#[tokio::test]
async fn creates_entry_in_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let other_room = factory::create_room_with_owner(db, &owner.id).await?;
    factory::create_entry(db, &other_room.id).await?;
    let room_id = factory::parse_id(&room.id);

    let repo = EntryRepository::new(db);
    let entry = repo.create(room_id, "Kickoff notes".to_string()).await?;

    assert_eq!(repo.get_by_room(room_id).await?, vec![entry]);

    Ok(())
}
