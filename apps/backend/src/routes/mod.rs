//! Route table.
//!
//! Every path is registered explicitly. A known path called with the wrong
//! method answers 405 naming the allowed method; any other path answers 404.

use actix_web::http::Method;
use actix_web::{web, FromRequest, Handler, HttpResponse, Resource, Responder};
use serde::Serialize;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::SessionId;
use crate::protocol::envelope::ApiResponse;

pub mod cards;
pub mod default;
pub mod health;
pub mod user;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(default::configure_routes)
        .configure(cards::configure_routes)
        .configure(user::configure_routes)
        .configure(health::configure_routes)
        .default_service(web::to(not_found));
}

/// Resource for `paths` that accepts only `method`.
pub(crate) fn only<F, Args>(paths: &[&str], method: Method, handler: F) -> Resource
where
    F: Handler<Args>,
    Args: FromRequest + 'static,
    F::Output: Responder + 'static,
{
    let allowed = method.to_string();
    web::resource(paths.to_vec())
        .route(web::method(method).to(handler))
        .default_service(web::to(move || {
            let allowed = allowed.clone();
            async move { Err::<HttpResponse, _>(AppError::method_not_allowed(&allowed)) }
        }))
}

/// `200 OK` success envelope, setting the session cookie for new sessions.
pub(crate) fn respond<T: Serialize>(session: &SessionId, message: T) -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    session.attach(&mut builder);
    builder.json(ApiResponse::ok(message))
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::NotFound, "Page does not exist."))
}
