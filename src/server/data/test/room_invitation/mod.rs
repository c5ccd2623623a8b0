use crate::server::{
    data::{room_invitation::RoomInvitationRepository, room_member::RoomMemberRepository},
    model::room::RoomRole,
};
use entity::room_invitation::InvitationStatus;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod accept;
mod create_pending;
mod get_pending_for_user;
mod pending_exists;
mod reject;
