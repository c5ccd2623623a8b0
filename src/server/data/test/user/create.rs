use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the user with a generated id and that the
/// record can be found again by that id.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("alice", "alice@example.com")).await?;

    assert_eq!(user.username, "alice");
    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests the unique username constraint.
///
/// Verifies that inserting a second user with an existing username fails at the
/// database level.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("alice", "alice@example.com")).await?;

    let result = repo.create(params("alice", "other@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
