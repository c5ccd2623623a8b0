use crate::server::{data::board_column::BoardColumnRepository, model::column::CreateColumnParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update_title;
