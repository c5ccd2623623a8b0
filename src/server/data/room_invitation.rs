//! Room invitation repository.
//!
//! Status transitions are conditional updates on `status = pending`, so two
//! concurrent decisions on the same invitation cannot both succeed. Acceptance also
//! inserts the invitee's membership in the same transaction. Creation checks for an
//! existing pending invitation and inserts in one transaction.

use chrono::Utc;
use entity::room_invitation::InvitationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::{
    data::{is_unique_violation, room_member::insert_member},
    model::{
        invitation::{CreateInvitationParams, Invitation, PendingInvitation},
        room::RoomRole,
    },
    util::parse::parse_uuid_from_string,
};

pub struct RoomInvitationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomInvitationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending invitation unless one already exists for the (room, invitee)
    /// pair.
    ///
    /// The check and the insert share one transaction, and the partial unique index on
    /// pending invitations rejects an insert that races past the check.
    ///
    /// # Returns
    /// - `Ok(Some(Invitation))` - New pending invitation
    /// - `Ok(None)` - A pending invitation already exists; nothing was inserted
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn create_pending(
        &self,
        params: CreateInvitationParams,
    ) -> Result<Option<Invitation>, DbErr> {
        let txn = self.db.begin().await?;

        if pending_exists(&txn, params.room_id, params.invitee_id).await? {
            txn.rollback().await?;
            return Ok(None);
        }

        let inserted = entity::room_invitation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            room_id: ActiveValue::Set(params.room_id.to_string()),
            inviter_id: ActiveValue::Set(params.inviter_id.to_string()),
            invitee_id: ActiveValue::Set(params.invitee_id.to_string()),
            status: ActiveValue::Set(InvitationStatus::Pending),
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

        Invitation::from_entity(entity).map(Some)
    }

    pub async fn find_by_id(&self, invitation_id: Uuid) -> Result<Option<Invitation>, DbErr> {
        entity::prelude::RoomInvitation::find_by_id(invitation_id.to_string())
            .one(self.db)
            .await?
            .map(Invitation::from_entity)
            .transpose()
    }

    /// Checks whether a pending invitation exists for the (room, invitee) pair.
    pub async fn pending_exists(&self, room_id: Uuid, invitee_id: Uuid) -> Result<bool, DbErr> {
        pending_exists(self.db, room_id, invitee_id).await
    }

    /// Accepts a pending invitation addressed to `invitee_id` and adds the invitee to
    /// the room as a `member`.
    ///
    /// Both writes share one transaction. If the invitee already holds a membership
    /// (for example added directly by an admin meanwhile) no second row is inserted.
    ///
    /// # Returns
    /// - `Ok(Some(Invitation))` - Invitation is now accepted and the membership exists
    /// - `Ok(None)` - No pending invitation with this id for this invitee; nothing changed
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn accept(
        &self,
        invitation_id: Uuid,
        invitee_id: Uuid,
    ) -> Result<Option<Invitation>, DbErr> {
        let txn = self.db.begin().await?;

        if !transition_pending(&txn, invitation_id, invitee_id, InvitationStatus::Accepted).await? {
            txn.rollback().await?;
            return Ok(None);
        }

        let Some(entity) = entity::prelude::RoomInvitation::find_by_id(invitation_id.to_string())
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };
        let invitation = Invitation::from_entity(entity)?;

        let already_member = entity::prelude::RoomMember::find()
            .filter(entity::room_member::Column::RoomId.eq(invitation.room_id.to_string()))
            .filter(entity::room_member::Column::UserId.eq(invitee_id.to_string()))
            .one(&txn)
            .await?
            .is_some();

        if !already_member {
            insert_member(&txn, invitation.room_id, invitee_id, RoomRole::Member).await?;
        }

        txn.commit().await?;

        Ok(Some(invitation))
    }

    /// Rejects a pending invitation addressed to `invitee_id`.
    ///
    /// # Returns
    /// - `Ok(Some(Invitation))` - Invitation is now rejected
    /// - `Ok(None)` - No pending invitation with this id for this invitee
    pub async fn reject(
        &self,
        invitation_id: Uuid,
        invitee_id: Uuid,
    ) -> Result<Option<Invitation>, DbErr> {
        if !transition_pending(self.db, invitation_id, invitee_id, InvitationStatus::Rejected)
            .await?
        {
            return Ok(None);
        }

        self.find_by_id(invitation_id).await
    }

    /// Gets pending invitations addressed to a user, newest first, with the room name
    /// and inviter name resolved.
    ///
    /// Invitations whose room or inviter no longer exist are skipped.
    pub async fn get_pending_for_user(
        &self,
        invitee_id: Uuid,
    ) -> Result<Vec<PendingInvitation>, DbErr> {
        let rows = entity::prelude::RoomInvitation::find()
            .filter(entity::room_invitation::Column::InviteeId.eq(invitee_id.to_string()))
            .filter(entity::room_invitation::Column::Status.eq(InvitationStatus::Pending))
            .find_also_related(entity::prelude::Room)
            .order_by_desc(entity::room_invitation::Column::CreatedAt)
            .all(self.db)
            .await?;

        let inviter_ids: Vec<String> = rows.iter().map(|(i, _)| i.inviter_id.clone()).collect();
        let inviter_names: HashMap<String, String> = if inviter_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(inviter_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|u| (u.id, u.name))
                .collect()
        };

        let mut pending = Vec::with_capacity(rows.len());
        for (invitation, room) in rows {
            let (Some(room), Some(inviter_name)) =
                (room, inviter_names.get(&invitation.inviter_id).cloned())
            else {
                continue;
            };

            pending.push(PendingInvitation {
                id: parse_uuid_from_string(invitation.id)?,
                room_id: parse_uuid_from_string(invitation.room_id)?,
                room_name: room.name,
                inviter_id: parse_uuid_from_string(invitation.inviter_id)?,
                inviter_name,
                created_at: invitation.created_at,
            });
        }

        Ok(pending)
    }
}

async fn pending_exists<C: ConnectionTrait>(
    conn: &C,
    room_id: Uuid,
    invitee_id: Uuid,
) -> Result<bool, DbErr> {
    let count = entity::prelude::RoomInvitation::find()
        .filter(entity::room_invitation::Column::RoomId.eq(room_id.to_string()))
        .filter(entity::room_invitation::Column::InviteeId.eq(invitee_id.to_string()))
        .filter(entity::room_invitation::Column::Status.eq(InvitationStatus::Pending))
        .count(conn)
        .await?;

    Ok(count > 0)
}

/// Moves an invitation out of `pending` if it is still pending and addressed to
/// `invitee_id`.
///
/// # Returns
/// - `Ok(true)` - This call performed the transition
/// - `Ok(false)` - The row is absent, already decided, or addressed to someone else
async fn transition_pending<C: ConnectionTrait>(
    conn: &C,
    invitation_id: Uuid,
    invitee_id: Uuid,
    to: InvitationStatus,
) -> Result<bool, DbErr> {
    let result = entity::prelude::RoomInvitation::update_many()
        .set(entity::room_invitation::ActiveModel {
            status: ActiveValue::Set(to),
            ..Default::default()
        })
        .filter(entity::room_invitation::Column::Id.eq(invitation_id.to_string()))
        .filter(entity::room_invitation::Column::InviteeId.eq(invitee_id.to_string()))
        .filter(entity::room_invitation::Column::Status.eq(InvitationStatus::Pending))
        .exec(conn)
        .await?;

    Ok(result.rows_affected == 1)
}
