use super::*;

/// Tests accepting a pending request.
///
/// Expected: Ok(Some) with status accepted
#[tokio::test]
async fn accepts_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_friendship_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    factory::create_friendship(db, &alice.id, &bob.id, FriendshipStatus::Pending).await?;

    let accepted = FriendshipRepository::new(db)
        .accept(factory::parse_id(&alice.id), factory::parse_id(&bob.id))
        .await?;

    assert_eq!(accepted.map(|f| f.status), Some(FriendshipStatus::Accepted));

    Ok(())
}

/// Tests that the accept direction matters.
///
/// The requester cannot accept their own request on behalf of the target.
///
/// Expected: Ok(None) and the record stays pending
#[tokio::test]
async fn requires_matching_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_friendship_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    factory::create_friendship(db, &alice.id, &bob.id, FriendshipStatus::Pending).await?;
    let (alice_id, bob_id) = (factory::parse_id(&alice.id), factory::parse_id(&bob.id));

    let repo = FriendshipRepository::new(db);
    let result = repo.accept(bob_id, alice_id).await?;

    assert!(result.is_none());
    let stored = repo.find_between(alice_id, bob_id).await?;
    assert_eq!(stored.map(|f| f.status), Some(FriendshipStatus::Pending));

    Ok(())
}

/// Tests accepting an already accepted request.
///
/// Expected: Ok(None) on the second accept
#[tokio::test]
async fn second_accept_finds_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_friendship_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    factory::create_friendship(db, &alice.id, &bob.id, FriendshipStatus::Pending).await?;
    let (alice_id, bob_id) = (factory::parse_id(&alice.id), factory::parse_id(&bob.id));

    let repo = FriendshipRepository::new(db);
    assert!(repo.accept(alice_id, bob_id).await?.is_some());
    assert!(repo.accept(alice_id, bob_id).await?.is_none());

    Ok(())
}
