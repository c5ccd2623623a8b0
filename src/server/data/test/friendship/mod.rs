use crate::server::data::friendship::FriendshipRepository;
use entity::friendship::FriendshipStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod accept;
mod create_request;
mod find_between;
mod get_accepted_for_user;
mod get_incoming;
