use super::*;

/// Tests listing incoming requests.
///
/// Verifies that only pending requests targeting the user are returned, each with the
/// requester's profile.
///
/// Expected: Ok with one request from bob
#[tokio::test]
async fn returns_pending_requests_with_requester() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_friendship_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user_with_username(db, "bob").await?;
    let carol = factory::user::create_user(db).await?;
    factory::create_friendship(db, &bob.id, &alice.id, FriendshipStatus::Pending).await?;
    factory::create_friendship(db, &carol.id, &alice.id, FriendshipStatus::Accepted).await?;
    factory::create_friendship(db, &alice.id, &carol.id, FriendshipStatus::Pending).await?;

    let incoming = FriendshipRepository::new(db)
        .get_incoming(factory::parse_id(&alice.id))
        .await?;

    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0].requester.username, "bob");

    Ok(())
}
