use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_identifier;
mod get_all_paginated;
mod update_password;

fn params(username: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        name: format!("{} name", username),
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
    }
}
