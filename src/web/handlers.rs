//! HTTP handlers for the key routes

use axum::{
    extract::{rejection::BytesRejection, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::store::{Store, StoreError};

/// Shared application state
pub type SharedStore<S> = Arc<Mutex<S>>;

/// Path prefix in front of the key segment
pub const KEY_PREFIX: &str = "/v1/";

/// Percent-decode the key segment of a `/v1/{key}` request
///
/// The key is taken from the raw path so that segments decoding to
/// invalid UTF-8 are kept as opaque bytes.
pub fn key_from_uri(uri: &Uri) -> Bytes {
    let raw = uri.path().strip_prefix(KEY_PREFIX).unwrap_or_default();
    Bytes::from(urlencoding::decode_binary(raw.as_bytes()).into_owned())
}

/// PUT /v1/:key - store the request body under `key`
pub async fn put_value<S: Store>(
    State(store): State<SharedStore<S>>,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let key = key_from_uri(&uri);
    let value = match body {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to read body for key {}: {}", key.escape_ascii(), e);
            return text_error(StatusCode::INTERNAL_SERVER_ERROR, e.body_text());
        }
    };

    debug!("PUT {} ({} bytes)", key.escape_ascii(), value.len());

    let result = store.lock().await.put(key, value);
    match result {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => store_error(e),
    }
}

/// GET /v1/:key - return the stored value
pub async fn get_value<S: Store>(
    State(store): State<SharedStore<S>>,
    uri: Uri,
) -> Response {
    let key = key_from_uri(&uri);
    debug!("GET {}", key.escape_ascii());

    let result = store.lock().await.get(&key);
    match result {
        Ok(value) => (StatusCode::OK, value).into_response(),
        Err(e) => store_error(e),
    }
}

/// DELETE /v1/:key - remove `key`, present or not
pub async fn delete_value<S: Store>(
    State(store): State<SharedStore<S>>,
    uri: Uri,
) -> Response {
    let key = key_from_uri(&uri);
    debug!("DELETE {}", key.escape_ascii());

    let result = store.lock().await.delete(&key);
    match result {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => store_error(e),
    }
}

/// Map a storage error to its HTTP status
pub fn status_for(err: &StoreError) -> StatusCode {
    if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn store_error(err: StoreError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        error!("Store error: {}", err);
    }
    text_error(status, err)
}

/// Plain-text error body, newline terminated
fn text_error(status: StatusCode, msg: impl fmt::Display) -> Response {
    (status, format!("{}\n", msg)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for() {
        assert_eq!(
            status_for(&StoreError::KeyNotFound(Bytes::from("k"))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&StoreError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_key_from_uri() {
        let uri: Uri = "/v1/alice".parse().unwrap();
        assert_eq!(key_from_uri(&uri), Bytes::from("alice"));

        let uri: Uri = "/v1/hello%20world?x=1".parse().unwrap();
        assert_eq!(key_from_uri(&uri), Bytes::from("hello world"));

        let uri: Uri = "/v1/%FF%00".parse().unwrap();
        assert_eq!(key_from_uri(&uri), Bytes::from_static(&[0xff, 0x00]));

        let uri: Uri = "/v1/a%2Fb".parse().unwrap();
        assert_eq!(key_from_uri(&uri), Bytes::from("a/b"));
    }

    #[test]
    fn test_text_error_body() {
        let response = text_error(StatusCode::NOT_FOUND, "no such key: \"k\"");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
    }
}
