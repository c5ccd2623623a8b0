use super::*;

/// Tests that the lookup ignores direction.
///
/// Expected: Ok(Some) from both sides of the pair
#[tokio::test]
async fn matches_either_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_friendship_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let carol = factory::user::create_user(db).await?;
    let record = factory::create_friendship(db, &alice.id, &bob.id, FriendshipStatus::Pending).await?;
    let (alice_id, bob_id) = (factory::parse_id(&alice.id), factory::parse_id(&bob.id));

    let repo = FriendshipRepository::new(db);

    let forward = repo.find_between(alice_id, bob_id).await?;
    let backward = repo.find_between(bob_id, alice_id).await?;
    let unrelated = repo
        .find_between(alice_id, factory::parse_id(&carol.id))
        .await?;

    assert_eq!(forward.map(|f| f.id), Some(factory::parse_id(&record.id)));
    assert_eq!(backward.map(|f| f.id), Some(factory::parse_id(&record.id)));
    assert!(unrelated.is_none());

    Ok(())
}
