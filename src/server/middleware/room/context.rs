//! Room request context extractor.
//!
//! Captures every place a request may name its room, without interpreting any of
//! them: query parameters, raw path parameters and the raw body. Resolution happens
//! later in [`super::resolver`], so the extractor itself never fails on a missing or
//! malformed room reference.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, RawPathParams, Request},
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::error::{access::AccessError, AppError};

/// Query parameter names accepted as a room reference, in priority order.
const QUERY_ROOM_KEYS: [&str; 2] = ["roomId", "room_id"];
const PATH_ROOM_KEY: &str = "room_id";
const PATH_COLUMN_KEY: &str = "column_id";

/// Raw inputs the role resolver inspects.
///
/// Empty strings are stored as `None`. The body is kept as bytes and only parsed
/// when a resolver strategy or the handler asks for it.
#[derive(Debug, Clone, Default)]
pub struct RoomRequestContext {
    pub query_room_id: Option<String>,
    pub path_room_id: Option<String>,
    pub path_column_id: Option<String>,
    pub body: Bytes,
}

impl RoomRequestContext {
    /// Deserializes the captured body as the handler's JSON payload.
    ///
    /// # Returns
    /// - `Ok(T)` - Parsed payload
    /// - `Err(AppError::BadRequest)` - Body is not valid JSON for `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
    }

    /// Parses the `column_id` path parameter.
    ///
    /// Needed when a higher-priority source resolved the room, leaving the column id
    /// itself unchecked.
    pub fn column_id(&self) -> Result<Uuid, AppError> {
        let raw = self.path_column_id.as_deref().unwrap_or_default();

        Uuid::parse_str(raw)
            .map_err(|_| AccessError::InvalidIdentifierFormat(raw.to_string()).into())
    }

    /// Builds a context from already separated parts.
    ///
    /// Used where the request is not available as a whole, and by tests.
    pub fn from_parts(
        query: &HashMap<String, String>,
        path: &HashMap<String, String>,
        body: Bytes,
    ) -> Self {
        Self {
            query_room_id: QUERY_ROOM_KEYS
                .iter()
                .find_map(|key| non_empty(query.get(*key))),
            path_room_id: non_empty(path.get(PATH_ROOM_KEY)),
            path_column_id: non_empty(path.get(PATH_COLUMN_KEY)),
            body,
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl<S> FromRequest<S> for RoomRequestContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        // Routes without path parameters have nothing to contribute here.
        let path: HashMap<String, String> =
            match RawPathParams::from_request_parts(&mut parts, state).await {
                Ok(params) => params
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
                Err(_) => HashMap::new(),
            };

        let Query(query) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let body = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(Self::from_parts(&query, &path, body))
    }
}
