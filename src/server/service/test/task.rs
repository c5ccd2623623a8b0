use super::*;
use crate::server::{
    error::room::RoomError,
    model::{
        room::{RoomAccess, RoomRole},
        task::{CreateTaskParams, UpdateTaskParams},
    },
    service::task::TaskService,
};

fn create_params(room_id: &str, column_id: &str) -> CreateTaskParams {
    CreateTaskParams {
        room_id: factory::parse_id(room_id),
        column_id: factory::parse_id(column_id),
        text: "Write the report".to_string(),
        description: String::new(),
        start_date: None,
        end_date: None,
        task_lists: Vec::new(),
    }
}

/// Tests that a task cannot be created in another room's column.
///
/// Expected: Err(ColumnOutsideRoom)
#[tokio::test]
async fn rejects_column_of_other_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;
    let other = factory::create_room_with_owner(db, &owner.id).await?;
    let foreign_column = factory::create_column(db, &other.id).await?;

    let result = TaskService::new(db)
        .create(create_params(&room.id, &foreign_column.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::RoomErr(RoomError::ColumnOutsideRoom))
    ));

    Ok(())
}

/// Tests that a task needs an existing column.
///
/// Expected: Err(ColumnNotFound)
#[tokio::test]
async fn rejects_missing_column() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let room = factory::create_room_with_owner(db, &owner.id).await?;

    let result = TaskService::new(db)
        .create(create_params(&room.id, &uuid::Uuid::new_v4().to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::RoomErr(RoomError::ColumnNotFound))
    ));

    Ok(())
}

/// Tests moving a task to another column of the same room and completing it.
///
/// Expected: Ok with the new column and the completed flag set
#[tokio::test]
async fn moves_task_within_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, room, _column, task) = factory::create_task_with_dependencies(db).await?;
    let done = factory::create_column(db, &room.id).await?;

    let updated = TaskService::new(db)
        .update(
            factory::parse_id(&room.id),
            UpdateTaskParams {
                id: factory::parse_id(&task.id),
                column_id: Some(factory::parse_id(&done.id)),
                completed: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.column_id, factory::parse_id(&done.id));
    assert!(updated.completed);
    assert_eq!(updated.text, task.text);

    Ok(())
}

/// Tests who may delete a task.
///
/// Verifies that a plain member who is not assigned is refused while an assigned
/// member may delete it.
///
/// Expected: Err(NotManagerOrAssignee) then Ok
#[tokio::test]
async fn delete_requires_manager_or_assignee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let column = factory::create_column(db, &roster.room.id).await?;
    let task = factory::create_task(db, &roster.room.id, &column.id).await?;
    let task_id = factory::parse_id(&task.id);
    let access = RoomAccess {
        room_id: factory::parse_id(&roster.room.id),
        user_id: factory::parse_id(&roster.member.id),
        role: RoomRole::Member,
    };
    let service = TaskService::new(db);

    let refused = service.delete(task_id, access).await;
    assert!(matches!(
        refused,
        Err(AppError::RoomErr(RoomError::NotManagerOrAssignee))
    ));

    factory::create_assignment(db, &task.id, &roster.member.id).await?;
    service.delete(task_id, access).await?;

    assert!(matches!(
        service.get_by_id(task_id).await,
        Err(AppError::RoomErr(RoomError::TaskNotFound))
    ));

    Ok(())
}
