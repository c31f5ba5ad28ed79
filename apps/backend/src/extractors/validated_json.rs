use std::future::Future;
use std::ops::{Deref, DerefMut};
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// JSON body extractor that reports decode failures through `AppError`.
///
/// An empty (or whitespace-only) body decodes as `{}`, so a request that
/// omits every parameter still reaches validation and gets the precise
/// "must be present" message rather than a parse error.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(_req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_id, error = %e, "Failed to read request body chunk");
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body.")
                })?;
                body.extend_from_slice(&chunk);
            }

            decode(&body).map(ValidatedJson).map_err(|e| {
                debug!(
                    trace_id = %trace_id,
                    error = %e,
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                AppError::bad_request(ErrorCode::BadRequest, classify_json_error(&e))
            })
        })
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, JsonError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

fn classify_json_error(error: &JsonError) -> String {
    use serde_json::error::Category;

    match error.classify() {
        Category::Syntax => format!("Invalid JSON at line {}.", error.line()),
        Category::Eof => "Invalid JSON: unexpected end of input.".to_string(),
        Category::Data => "Invalid JSON: wrong types for one or more fields.".to_string(),
        Category::Io => "Invalid JSON: I/O error while reading body.".to_string(),
    }
}
