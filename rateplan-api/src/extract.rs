use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Query-string extractor where a repeated key keeps its last value.
///
/// Malformed query strings are reported as a JSON 400 through `AppError`
/// rather than axum's plain-text rejection.
pub struct LastWinsQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LastWinsQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::ValidationError(e.body_text()))?;

        // later inserts replace earlier ones
        let fields: Map<String, Value> = pairs
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();

        serde_json::from_value(Value::Object(fields))
            .map(LastWinsQuery)
            .map_err(|e| AppError::ValidationError(format!("Invalid query string: {}", e)))
    }
}
