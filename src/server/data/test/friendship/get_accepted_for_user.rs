use super::*;

/// Tests the symmetric friend query.
///
/// The user appears as requester in one accepted record and as target in another;
/// a pending record must not count.
///
/// Expected: Ok with the two accepted records
#[tokio::test]
async fn returns_accepted_from_both_sides() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_friendship_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let carol = factory::user::create_user(db).await?;
    let dave = factory::user::create_user(db).await?;
    factory::create_friendship(db, &alice.id, &bob.id, FriendshipStatus::Accepted).await?;
    factory::create_friendship(db, &carol.id, &alice.id, FriendshipStatus::Accepted).await?;
    factory::create_friendship(db, &dave.id, &alice.id, FriendshipStatus::Pending).await?;
    let alice_id = factory::parse_id(&alice.id);

    let friendships = FriendshipRepository::new(db)
        .get_accepted_for_user(alice_id)
        .await?;

    let mut others: Vec<_> = friendships.iter().map(|f| f.other_party(alice_id)).collect();
    others.sort();
    let mut expected = vec![factory::parse_id(&bob.id), factory::parse_id(&carol.id)];
    expected.sort();
    assert_eq!(others, expected);

    Ok(())
}
