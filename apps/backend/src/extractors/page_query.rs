use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;

use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug, Deserialize)]
struct RawPage {
    page: Option<String>,
}

/// `?page=<int>` query parameter. A value that is not an integer counts as
/// absent and is rejected later by page validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<i64>,
}

impl FromRequest for PageQuery {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parsed = web::Query::<RawPage>::from_query(req.query_string())
            .map(|q| PageQuery {
                page: q.page.as_deref().and_then(|p| p.trim().parse().ok()),
            })
            .map_err(|_| AppError::bad_request(ErrorCode::BadRequest, "Invalid query string."));
        ready(parsed)
    }
}
