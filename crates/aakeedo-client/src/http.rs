use aakeedo_types::Validate;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;

/// Longest response body kept for diagnostics
const BODY_SNIPPET_CHARS: usize = 500;

/// Append percent-encoded path segments to `base`, dropping a trailing slash first
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| FetchError::Unknown(format!("{base} cannot be used as a base URL")))?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

/// Send the request and decode a 2xx body as JSON
pub(crate) async fn get_json(request: RequestBuilder) -> Result<Value, FetchError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::ResponseStatus {
            status,
            body: snippet(&body),
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Decode into `T` and check its invariants
pub(crate) fn parse<T>(value: Value) -> Result<T, FetchError>
where
    T: DeserializeOwned + Validate,
{
    let record: T = serde_json::from_value(value)?;
    record.validate()?;
    Ok(record)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn snippet(body: &str) -> String {
    match body.char_indices().nth(BODY_SNIPPET_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}

/// Collapse a fetch outcome to `Option`, logging why it failed
pub(crate) fn settle<T>(
    operation: &'static str,
    input: &str,
    result: Result<T, FetchError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(FetchError::InvalidInput { .. }) => {
            tracing::debug!("{operation}: rejected input {input:?} without a request");
            None
        }
        Err(e @ FetchError::Unknown(_)) => {
            tracing::error!("{operation}: unexpected failure for {input:?}: {e:?}");
            None
        }
        Err(e) => {
            tracing::warn!("{operation}: no result for {input:?}: {e}");
            None
        }
    }
}
