use super::*;

/// Tests listing a room's tasks with their assignees.
///
/// Expected: Ok with both tasks, only the first one carrying an assignee
#[tokio::test]
async fn attaches_assignees_per_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, room, column, first) = factory::create_task_with_dependencies(db).await?;
    let second = factory::create_task(db, &room.id, &column.id).await?;
    factory::create_assignment(db, &first.id, &owner.id).await?;

    let tasks = TaskRepository::new(db)
        .get_by_room(factory::parse_id(&room.id))
        .await?;

    assert_eq!(tasks.len(), 2);
    let first = tasks
        .iter()
        .find(|t| t.id == factory::parse_id(&first.id))
        .unwrap();
    let second = tasks
        .iter()
        .find(|t| t.id == factory::parse_id(&second.id))
        .unwrap();
    assert_eq!(first.assignee_ids, vec![factory::parse_id(&owner.id)]);
    assert!(second.assignee_ids.is_empty());

    Ok(())
}
