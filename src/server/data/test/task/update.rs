use super::*;

/// Tests a partial update.
///
/// Verifies that only provided fields change.
///
/// Expected: Ok(Some) with the new text and completion, description untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _room, _column, task) = factory::create_task_with_dependencies(db).await?;
    let task_id = factory::parse_id(&task.id);

    let updated = TaskRepository::new(db)
        .update(UpdateTaskParams {
            id: task_id,
            text: Some("Renamed".to_string()),
            completed: Some(true),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.text, "Renamed");
    assert!(updated.completed);
    assert_eq!(updated.description, task.description);

    Ok(())
}

/// Tests an update that carries no fields.
///
/// Expected: Ok(Some) with the task unchanged
#[tokio::test]
async fn empty_update_returns_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _room, _column, task) = factory::create_task_with_dependencies(db).await?;
    let task_id = factory::parse_id(&task.id);

    let updated = TaskRepository::new(db)
        .update(UpdateTaskParams {
            id: task_id,
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.map(|t| t.text), Some(task.text));

    Ok(())
}

/// Tests updating an unknown task.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = TaskRepository::new(db)
        .update(UpdateTaskParams {
            id: uuid::Uuid::new_v4(),
            text: Some("x".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
