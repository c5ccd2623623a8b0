use super::*;
use crate::server::{
    data::task_assignment::TaskAssignmentRepository, error::assignment::AssignmentError,
    service::assignment::AssignmentService,
};
use uuid::Uuid;

/// Tests assigning two members from an empty set, twice in a row.
///
/// Verifies the second run is a no-op and no duplicate rows appear.
///
/// Expected: exactly the two users assigned after both runs
#[tokio::test]
async fn reconcile_is_idempotent() -> Result<(), AppError> {
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
    users.sort();
    let service = AssignmentService::new(db);

    let first = service.reconcile(task_id, Some(users.clone())).await?;
    let second = service.reconcile(task_id, Some(users.clone())).await?;

    assert_eq!(first.added, users);
    assert!(first.removed.is_empty());
    assert!(second.added.is_empty());
    assert!(second.removed.is_empty());
    assert_eq!(second.assigned, users);

    let mut stored = TaskAssignmentRepository::new(db)
        .get_user_ids_by_task(task_id)
        .await?;
    stored.sort();
    assert_eq!(stored, users);

    Ok(())
}

/// Tests that an empty list unassigns everyone.
///
/// Expected: all current assignees reported as removed and none stored
#[tokio::test]
async fn empty_list_unassigns_everyone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let column = factory::create_column(db, &roster.room.id).await?;
    let task = factory::create_task(db, &roster.room.id, &column.id).await?;
    factory::create_assignment(db, &task.id, &roster.member.id).await?;
    let task_id = factory::parse_id(&task.id);

    let outcome = AssignmentService::new(db)
        .reconcile(task_id, Some(Vec::new()))
        .await?;

    assert_eq!(outcome.removed, vec![factory::parse_id(&roster.member.id)]);
    assert!(outcome.assigned.is_empty());
    assert!(TaskAssignmentRepository::new(db)
        .get_user_ids_by_task(task_id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that an absent list is not treated like an empty one.
///
/// Expected: Err(MissingAssigneeList) and the assignment untouched
#[tokio::test]
async fn absent_list_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let column = factory::create_column(db, &roster.room.id).await?;
    let task = factory::create_task(db, &roster.room.id, &column.id).await?;
    factory::create_assignment(db, &task.id, &roster.member.id).await?;
    let task_id = factory::parse_id(&task.id);

    let result = AssignmentService::new(db).reconcile(task_id, None).await;

    assert!(matches!(
        result,
        Err(AppError::AssignmentErr(AssignmentError::MissingAssigneeList))
    ));
    assert_eq!(
        TaskAssignmentRepository::new(db)
            .get_user_ids_by_task(task_id)
            .await?
            .len(),
        1
    );

    Ok(())
}

/// Tests that only differing users are written and duplicates collapse.
///
/// Expected: one removal, one addition, the kept user untouched
#[tokio::test]
async fn applies_minimal_difference() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_room_with_roster(db).await?;
    let column = factory::create_column(db, &roster.room.id).await?;
    let task = factory::create_task(db, &roster.room.id, &column.id).await?;
    factory::create_assignment(db, &task.id, &roster.owner.id).await?;
    factory::create_assignment(db, &task.id, &roster.admin.id).await?;
    let task_id = factory::parse_id(&task.id);
    let owner_id = factory::parse_id(&roster.owner.id);
    let admin_id = factory::parse_id(&roster.admin.id);
    let member_id = factory::parse_id(&roster.member.id);

    let outcome = AssignmentService::new(db)
        .reconcile(task_id, Some(vec![admin_id, member_id, member_id]))
        .await?;

    assert_eq!(outcome.added, vec![member_id]);
    assert_eq!(outcome.removed, vec![owner_id]);

    let mut expected = vec![admin_id, member_id];
    expected.sort();
    assert_eq!(outcome.assigned, expected);

    Ok(())
}

/// Tests that users outside the task's room cannot be assigned.
///
/// Expected: Err(AssigneeNotInRoom) naming the outsider
#[tokio::test]
async fn rejects_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _room, _column, task) = factory::create_task_with_dependencies(db).await?;
    let outsider = factory::user::create_user(db).await?;
    let outsider_id = factory::parse_id(&outsider.id);

    let result = AssignmentService::new(db)
        .reconcile(
            factory::parse_id(&task.id),
            Some(vec![factory::parse_id(&owner.id), outsider_id]),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AssignmentErr(AssignmentError::AssigneeNotInRoom(id))) if id == outsider_id
    ));

    Ok(())
}

/// Tests reconciliation of a task that does not exist.
///
/// Expected: Err(TaskNotFound)
#[tokio::test]
async fn fails_for_unknown_task() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AssignmentService::new(db)
        .reconcile(Uuid::new_v4(), Some(Vec::new()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AssignmentErr(AssignmentError::TaskNotFound))
    ));

    Ok(())
}
