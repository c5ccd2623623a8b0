use crate::server::{
    data::task::TaskRepository,
    model::task::{CreateTaskParams, TaskList, TaskListItem, UpdateTaskParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_room;
mod update;
