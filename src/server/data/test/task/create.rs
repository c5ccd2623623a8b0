use super::*;

/// Tests creating a task with checklists.
///
/// Verifies that checklists survive the JSON column and that a new task starts
/// incomplete and unassigned.
///
/// Expected: Ok with the stored task
#[tokio::test]
async fn creates_task_with_checklists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let column = factory::create_column(db, &room.id).await?;
    let lists = vec![TaskList {
        id: "l1".to_string(),
        name: "Prep".to_string(),
        items: vec![TaskListItem {
            id: "i1".to_string(),
            text: "Sand walls".to_string(),
            completed: false,
        }],
    }];

    let repo = TaskRepository::new(db);
    let task = repo
        .create(CreateTaskParams {
            room_id: factory::parse_id(&room.id),
            column_id: factory::parse_id(&column.id),
            text: "Paint".to_string(),
            description: String::new(),
            start_date: Some("2026-01-05".to_string()),
            end_date: None,
            task_lists: lists.clone(),
        })
        .await?;

    assert!(!task.completed);
    assert!(task.assignee_ids.is_empty());
    let stored = repo.find_by_id(task.id).await?.unwrap();
    assert_eq!(stored.task_lists, lists);
    assert_eq!(stored.start_date.as_deref(), Some("2026-01-05"));

    Ok(())
}
