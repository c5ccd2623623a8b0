//! Friendship repository.
//!
//! Records are directional (requester → target). Queries that concern the
//! relation itself match both directions.

use chrono::Utc;
use entity::friendship::FriendshipStatus;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    data::is_unique_violation,
    model::{
        friendship::{Friendship, IncomingFriendRequest},
        user::UserSummary,
    },
};

pub struct FriendshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendshipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending request from `requester_id` to `target_id` unless a record
    /// already links the two users in either direction.
    ///
    /// The check and the insert share one transaction, and the unique index on the
    /// unordered pair rejects an insert that races past the check.
    ///
    /// # Returns
    /// - `Ok(Some(Friendship))` - New pending request
    /// - `Ok(None)` - The pair is already linked; nothing was inserted
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn create_request(
        &self,
        requester_id: Uuid,
        target_id: Uuid,
    ) -> Result<Option<Friendship>, DbErr> {
        let txn = self.db.begin().await?;

        if find_between(&txn, requester_id, target_id).await?.is_some() {
            txn.rollback().await?;
            return Ok(None);
        }

        let inserted = entity::friendship::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            requester_id: ActiveValue::Set(requester_id.to_string()),
            target_id: ActiveValue::Set(target_id.to_string()),
            status: ActiveValue::Set(FriendshipStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&txn)
        .await;

        let entity = match inserted {
            Ok(entity) => entity,
            Err(err) if is_unique_violation(&err) => {
                txn.rollback().await?;
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        txn.commit().await?;

        Friendship::from_entity(entity).map(Some)
    }

    /// Finds any record linking the two users, in either direction.
    ///
    /// Every stored status counts as active, since friendships are never rejected.
    pub async fn find_between(&self, a: Uuid, b: Uuid) -> Result<Option<Friendship>, DbErr> {
        find_between(self.db, a, b).await
    }

    /// Accepts the pending request sent by `requester_id` to `target_id`.
    ///
    /// The update only matches a row that is still pending, so a concurrent second
    /// accept sees zero affected rows.
    ///
    /// # Returns
    /// - `Ok(Some(Friendship))` - Request is now accepted
    /// - `Ok(None)` - No pending request in that direction
    pub async fn accept(
        &self,
        requester_id: Uuid,
        target_id: Uuid,
    ) -> Result<Option<Friendship>, DbErr> {
        let result = entity::prelude::Friendship::update_many()
            .set(entity::friendship::ActiveModel {
                status: ActiveValue::Set(FriendshipStatus::Accepted),
                ..Default::default()
            })
            .filter(entity::friendship::Column::RequesterId.eq(requester_id.to_string()))
            .filter(entity::friendship::Column::TargetId.eq(target_id.to_string()))
            .filter(entity::friendship::Column::Status.eq(FriendshipStatus::Pending))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::Friendship::find()
            .filter(entity::friendship::Column::RequesterId.eq(requester_id.to_string()))
            .filter(entity::friendship::Column::TargetId.eq(target_id.to_string()))
            .filter(entity::friendship::Column::Status.eq(FriendshipStatus::Accepted))
            .one(self.db)
            .await?
            .map(Friendship::from_entity)
            .transpose()
    }

    /// Gets accepted friendships where the user is on either side.
    pub async fn get_accepted_for_user(&self, user_id: Uuid) -> Result<Vec<Friendship>, DbErr> {
        let id = user_id.to_string();

        entity::prelude::Friendship::find()
            .filter(entity::friendship::Column::Status.eq(FriendshipStatus::Accepted))
            .filter(
                Condition::any()
                    .add(entity::friendship::Column::RequesterId.eq(id.clone()))
                    .add(entity::friendship::Column::TargetId.eq(id)),
            )
            .all(self.db)
            .await?
            .into_iter()
            .map(Friendship::from_entity)
            .collect()
    }

    /// Gets pending requests addressed to the user, oldest first, with requester profiles.
    pub async fn get_incoming(&self, target_id: Uuid) -> Result<Vec<IncomingFriendRequest>, DbErr> {
        let rows = entity::prelude::Friendship::find()
            .filter(entity::friendship::Column::TargetId.eq(target_id.to_string()))
            .filter(entity::friendship::Column::Status.eq(FriendshipStatus::Pending))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::friendship::Column::CreatedAt)
            .all(self.db)
            .await?;

        let mut requests = Vec::with_capacity(rows.len());
        for (friendship, requester) in rows {
            let Some(requester) = requester else {
                continue;
            };
            let friendship = Friendship::from_entity(friendship)?;

            requests.push(IncomingFriendRequest {
                id: friendship.id,
                requester: UserSummary::from_entity(requester)?,
                created_at: friendship.created_at,
            });
        }

        Ok(requests)
    }
}

async fn find_between<C: ConnectionTrait>(
    conn: &C,
    a: Uuid,
    b: Uuid,
) -> Result<Option<Friendship>, DbErr> {
    let (a, b) = (a.to_string(), b.to_string());

    entity::prelude::Friendship::find()
        .filter(
            Condition::any()
                .add(
                    Condition::all()
                        .add(entity::friendship::Column::RequesterId.eq(a.clone()))
                        .add(entity::friendship::Column::TargetId.eq(b.clone())),
                )
                .add(
                    Condition::all()
                        .add(entity::friendship::Column::RequesterId.eq(b))
                        .add(entity::friendship::Column::TargetId.eq(a)),
                ),
        )
        .one(conn)
        .await?
        .map(Friendship::from_entity)
        .transpose()
}
