use axum::body::Bytes;
use std::collections::HashMap;

use crate::server::{
    error::{access::AccessError, auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        room::{context::RoomRequestContext, guard::AccessGuard, resolver::RoleResolver},
        session::AuthSession,
    },
    model::room::RoomRole,
};
use test_utils::{builder::TestBuilder, factory};

mod guard;

/// Builds a request context carrying the given raw room references.
fn room_context(
    query: Option<&str>,
    path: Option<&str>,
    column: Option<&str>,
    body: Option<String>,
) -> RoomRequestContext {
    let mut query_params = HashMap::new();
    if let Some(value) = query {
        query_params.insert("roomId".to_string(), value.to_string());
    }

    let mut path_params = HashMap::new();
    if let Some(value) = path {
        path_params.insert("room_id".to_string(), value.to_string());
    }
    if let Some(value) = column {
        path_params.insert("column_id".to_string(), value.to_string());
    }

    RoomRequestContext::from_parts(
        &query_params,
        &path_params,
        body.map(Bytes::from).unwrap_or_default(),
    )
}
