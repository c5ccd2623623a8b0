use super::*;

/// Tests deleting an entry.
///
/// Expected: Ok(true) then Ok(false) for the same id
#[tokio::test]
async fn deletes_entry_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let entry = factory::create_entry(db, &room.id).await?;
    let entry_id = factory::parse_id(&entry.id);

    let repo = EntryRepository::new(db);

    assert!(repo.delete(entry_id).await?);
    assert!(!repo.delete(entry_id).await?);
    assert!(repo.find_by_id(entry_id).await?.is_none());

    Ok(())
}
