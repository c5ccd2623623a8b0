use crate::server::{data::room_member::RoomMemberRepository, model::room::RoomRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
mod filter_members;
mod update_role;
