use super::*;

/// Tests inserting several assignments at once.
///
/// Expected: Ok and both users assigned
#[tokio::test]
async fn assigns_every_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let column = factory::create_column(db, &roster.room.id).await?;
    let task = factory::create_task(db, &roster.room.id, &column.id).await?;
    let task_id = factory::parse_id(&task.id);
    let mut users = vec![
        factory::parse_id(&roster.admin.id),
        factory::parse_id(&roster.member.id),
    ];

    let repo = TaskAssignmentRepository::new(db);
    repo.create_many(task_id, &users).await?;

    let mut assigned = repo.get_user_ids_by_task(task_id).await?;
    assigned.sort();
    users.sort();
    assert_eq!(assigned, users);
    assert!(repo.is_assigned(task_id, users[0]).await?);

    Ok(())
}
