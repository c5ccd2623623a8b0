use super::*;

/// Tests replacing a password hash.
///
/// Expected: Ok(true) and the new hash is stored
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("alice", "alice@example.com")).await?;

    let updated = repo.update_password(user.id, "new-hash".to_string()).await?;

    assert!(updated);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}

/// Tests updating the password of an unknown user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .update_password(uuid::Uuid::new_v4(), "hash".to_string())
        .await?;

    assert!(!updated);

    Ok(())
}
