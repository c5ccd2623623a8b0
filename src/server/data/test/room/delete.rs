use super::*;

/// Tests that deleting a room cascades to everything it owns.
///
/// Expected: Ok(true) and no memberships, columns, tasks, assignments or entries left
#[tokio::test]
async fn deletes_room_and_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, room, _column, task) = factory::create_task_with_dependencies(db).await?;
    factory::create_assignment(db, &task.id, &owner.id).await?;
    factory::create_entry(db, &room.id).await?;

    let deleted = RoomRepository::new(db)
        .delete(factory::parse_id(&room.id))
        .await?;

    assert!(deleted);
    assert_eq!(entity::prelude::RoomMember::find().count(db).await?, 0);
    assert_eq!(entity::prelude::BoardColumn::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Task::find().count(db).await?, 0);
    assert_eq!(entity::prelude::TaskAssignment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Entry::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a room that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = RoomRepository::new(db).delete(uuid::Uuid::new_v4()).await?;

    assert!(!deleted);

    Ok(())
}
