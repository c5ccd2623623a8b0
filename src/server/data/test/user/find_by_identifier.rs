use super::*;

/// Tests lookup by email.
///
/// Verifies that an identifier containing `@` is matched against the email column,
/// case-insensitively.
///
/// Expected: Ok(Some) for the user with that email
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("alice", "alice@example.com")).await?;

    let found = repo.find_by_identifier("Alice@Example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests lookup by username.
///
/// Verifies that an identifier without `@` is matched against the username column.
///
/// Expected: Ok(Some) for the user with that username
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("alice", "alice@example.com")).await?;

    let found = repo.find_by_identifier("alice").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests lookup of an unknown identifier.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_identifier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_identifier("nobody").await?.is_none());
    assert!(repo.find_by_identifier("nobody@example.com").await?.is_none());

    Ok(())
}
