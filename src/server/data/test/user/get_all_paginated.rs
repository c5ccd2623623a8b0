use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns the requested page ordered by name along with
/// the total user count.
///
/// Expected: Ok with the page's users and a total of 5
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    for i in 1..=5 {
        repo.create(params(&format!("user{}", i), &format!("user{}@example.com", i)))
            .await?;
    }

    let (users, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);
    assert_eq!(users[0].username, "user1");

    let (users, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "user5");

    Ok(())
}

/// Tests pagination with empty database.
///
/// Expected: Ok with empty vector and zero total
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (users, total) = UserRepository::new(db).get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
