//! JSON request body helpers.

use salvo::{
    http::header::CONTENT_TYPE,
    prelude::{Request, StatusError},
};
use serde_json::Value;
use tracing::debug;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Read untrusted JSON bodies, enforcing the JSON content type first.
pub(crate) trait RequestJsonExt {
    /// Fails with 415 unless the request declares `application/json`, and
    /// with 400 when the body is not well-formed JSON.
    async fn json_value_or_4xx(&mut self) -> Result<Value, StatusError>;
}

impl RequestJsonExt for Request {
    async fn json_value_or_4xx(&mut self) -> Result<Value, StatusError> {
        let content_type = self
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());

        if !is_json_media_type(content_type) {
            debug!(?content_type, "rejected non-json request body");

            return Err(StatusError::unsupported_media_type()
                .brief(format!("Content-Type must be {JSON_MEDIA_TYPE}")));
        }

        let payload = self.payload().await.map_err(|error| {
            debug!("failed to read request body: {error}");

            StatusError::bad_request().brief("Unable to read request body")
        })?;

        serde_json::from_slice(payload).map_err(|error| {
            debug!("malformed json body: {error}");

            StatusError::bad_request().brief("Malformed JSON body")
        })
    }
}

fn is_json_media_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
}
