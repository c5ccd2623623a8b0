use crate::server::{
    data::room::RoomRepository,
    model::room::{CreateRoomParams, RoomRole},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_with_owner;
mod delete;
mod get_for_user;
