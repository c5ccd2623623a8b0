use super::*;

/// Tests deleting by exclusion.
///
/// Expected: Ok(1) and only the kept user remains assigned
#[tokio::test]
async fn deletes_users_not_kept() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let column = factory::create_column(db, &roster.room.id).await?;
    let task = factory::create_task(db, &roster.room.id, &column.id).await?;
    factory::create_assignment(db, &task.id, &roster.admin.id).await?;
    factory::create_assignment(db, &task.id, &roster.member.id).await?;
    let task_id = factory::parse_id(&task.id);
    let member_id = factory::parse_id(&roster.member.id);

    let repo = TaskAssignmentRepository::new(db);
    let removed = repo.delete_excluding(task_id, &[member_id]).await?;

    assert_eq!(removed, 1);
    assert_eq!(repo.get_user_ids_by_task(task_id).await?, vec![member_id]);

    Ok(())
}

/// Tests that an empty keep list clears the task.
///
/// Expected: Ok(2) and no assignments left
#[tokio::test]
async fn empty_keep_list_deletes_all() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let column = factory::create_column(db, &roster.room.id).await?;
    let task = factory::create_task(db, &roster.room.id, &column.id).await?;
    let other_task = factory::create_task(db, &roster.room.id, &column.id).await?;
    factory::create_assignment(db, &task.id, &roster.admin.id).await?;
    factory::create_assignment(db, &task.id, &roster.member.id).await?;
    factory::create_assignment(db, &other_task.id, &roster.member.id).await?;
    let task_id = factory::parse_id(&task.id);

    let repo = TaskAssignmentRepository::new(db);
    let removed = repo.delete_excluding(task_id, &[]).await?;

    assert_eq!(removed, 2);
    assert!(repo.get_user_ids_by_task(task_id).await?.is_empty());
    assert_eq!(
        repo.get_user_ids_by_task(factory::parse_id(&other_task.id))
            .await?
            .len(),
        1
    );

    Ok(())
}
