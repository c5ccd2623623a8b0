use crate::server::data::task_assignment::TaskAssignmentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod delete_excluding;
