use super::*;
use crate::server::data::is_unique_violation;
use migration::{Migrator, MigratorTrait};

/// Tests that a request is stored only while the pair is unlinked, in either direction.
///
/// Expected: Ok(Some) first, Ok(None) for the same and the reverse direction
#[tokio::test]
async fn creates_one_record_per_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_friendship_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let (alice_id, bob_id) = (factory::parse_id(&alice.id), factory::parse_id(&bob.id));

    let repo = FriendshipRepository::new(db);

    let request = repo.create_request(alice_id, bob_id).await?;
    assert!(request.is_some_and(|f| f.status == FriendshipStatus::Pending));

    assert!(repo.create_request(alice_id, bob_id).await?.is_none());
    assert!(repo.create_request(bob_id, alice_id).await?.is_none());

    Ok(())
}

/// Tests that the migrated schema refuses a second record for a pair, whichever
/// side sends it.
///
/// Expected: unique violation on the reverse insert
#[tokio::test]
async fn migrated_schema_enforces_one_record_per_pair() -> Result<(), DbErr> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    let alice = factory::user::create_user(&db).await?;
    let bob = factory::user::create_user(&db).await?;
    let carol = factory::user::create_user(&db).await?;

    factory::create_friendship(&db, &alice.id, &bob.id, FriendshipStatus::Accepted).await?;
    factory::create_friendship(&db, &carol.id, &bob.id, FriendshipStatus::Pending).await?;

    let reverse =
        factory::create_friendship(&db, &bob.id, &alice.id, FriendshipStatus::Pending).await;

    assert!(reverse.is_err_and(|e| is_unique_violation(&e)));

    Ok(())
}
