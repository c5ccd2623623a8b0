//! Role resolver.
//!
//! Finds the room a request refers to and the caller's role in it. The room
//! reference is located by trying an ordered list of strategies, each a pure
//! function over the [`RoomRequestContext`]; the first one that finds a value wins
//! and later sources are never consulted. The order matters because some routes
//! only carry a column id.

use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use crate::server::{
    data::{board_column::BoardColumnRepository, room_member::RoomMemberRepository},
    error::{access::AccessError, AppError},
    middleware::room::context::RoomRequestContext,
    model::room::RoomAccess,
};

/// Body field names accepted as a room reference, in priority order.
const BODY_ROOM_KEYS: [&str; 2] = ["room_id", "roomId"];

/// Unvalidated room reference found in a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomReference {
    /// Names the room directly.
    Room(String),
    /// Names a column; the room is the column's owner.
    Column(String),
}

type Strategy = fn(&RoomRequestContext) -> Option<RoomReference>;

/// Resolution order: query, path, body, then column in path.
const STRATEGIES: [Strategy; 4] = [from_query, from_path, from_body, from_path_column];

fn from_query(ctx: &RoomRequestContext) -> Option<RoomReference> {
    ctx.query_room_id.clone().map(RoomReference::Room)
}

fn from_path(ctx: &RoomRequestContext) -> Option<RoomReference> {
    ctx.path_room_id.clone().map(RoomReference::Room)
}

/// Reads `room_id` (or `roomId`) from a JSON object body.
///
/// A body that is empty or not a JSON object counts as absent. Non-string values are
/// kept in their JSON form so they fail identifier parsing instead of falling through.
fn from_body(ctx: &RoomRequestContext) -> Option<RoomReference> {
    if ctx.body.is_empty() {
        return None;
    }

    let body: Value = serde_json::from_slice(&ctx.body).ok()?;
    let object = body.as_object()?;

    BODY_ROOM_KEYS
        .iter()
        .find_map(|key| match object.get(*key)? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.trim().to_string()),
            other => Some(other.to_string()),
        })
        .map(RoomReference::Room)
}

fn from_path_column(ctx: &RoomRequestContext) -> Option<RoomReference> {
    ctx.path_column_id.clone().map(RoomReference::Column)
}

/// Finds the highest-priority room reference in the context.
///
/// # Returns
/// - `Ok(RoomReference)` - First reference found, in strategy order
/// - `Err(AccessError::MissingRoomReference)` - No source carried a value
pub fn locate_room_reference(ctx: &RoomRequestContext) -> Result<RoomReference, AccessError> {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(ctx))
        .ok_or(AccessError::MissingRoomReference)
}

fn parse_identifier(raw: &str) -> Result<Uuid, AccessError> {
    Uuid::parse_str(raw).map_err(|_| AccessError::InvalidIdentifierFormat(raw.to_string()))
}

pub struct RoleResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the room id a request refers to.
    ///
    /// # Returns
    /// - `Ok(Uuid)` - Room id, directly or via the referenced column
    /// - `Err(AccessError::MissingRoomReference)` - Nothing to resolve
    /// - `Err(AccessError::InvalidIdentifierFormat)` - First reference found is not a UUID
    /// - `Err(AccessError::ReferencedEntityNotFound)` - Column does not exist
    pub async fn resolve_room_id(&self, ctx: &RoomRequestContext) -> Result<Uuid, AppError> {
        match locate_room_reference(ctx)? {
            RoomReference::Room(raw) => Ok(parse_identifier(&raw)?),
            RoomReference::Column(raw) => {
                let column_id = parse_identifier(&raw)?;

                let Some(column) = BoardColumnRepository::new(self.db)
                    .find_by_id(column_id)
                    .await?
                else {
                    return Err(AccessError::ReferencedEntityNotFound(raw).into());
                };

                Ok(column.room_id)
            }
        }
    }

    /// Resolves the request's room and the caller's role in it.
    ///
    /// # Returns
    /// - `Ok(RoomAccess)` - Room, caller and role
    /// - `Err(AccessError::NotAMember)` - Caller holds no membership in the room
    /// - Any error of [`Self::resolve_room_id`]
    pub async fn resolve(
        &self,
        ctx: &RoomRequestContext,
        user_id: Uuid,
    ) -> Result<RoomAccess, AppError> {
        let room_id = self.resolve_room_id(ctx).await?;

        self.resolve_in_room(room_id, user_id).await
    }

    /// Looks up the caller's role in a known room.
    pub async fn resolve_in_room(&self, room_id: Uuid, user_id: Uuid) -> Result<RoomAccess, AppError> {
        let Some(member) = RoomMemberRepository::new(self.db)
            .find(room_id, user_id)
            .await?
        else {
            return Err(AccessError::NotAMember.into());
        };

        Ok(RoomAccess {
            room_id,
            user_id,
            role: member.role,
        })
    }
}
