use super::*;

/// Tests that deleting a column removes its tasks.
///
/// Expected: Ok(true) and no tasks left
#[tokio::test]
async fn deletes_column_and_its_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _room, column, _task) = factory::create_task_with_dependencies(db).await?;

    let deleted = BoardColumnRepository::new(db)
        .delete(factory::parse_id(&column.id))
        .await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Task::find().count(db).await?, 0);

    Ok(())
}
