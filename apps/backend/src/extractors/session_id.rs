use std::future::{ready, Ready};

use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponseBuilder};
use uuid::Uuid;

use crate::error::AppError;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "cards_sid";

/// Session id of the caller, taken from the `cards_sid` cookie.
///
/// A missing or malformed cookie yields a freshly minted id; the handler
/// must then attach the cookie to its response via [`SessionId::attach`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId {
    id: String,
    fresh: bool,
}

impl SessionId {
    pub fn mint() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            fresh: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// True when the id was minted for this request.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Set the session cookie on `builder` when the id is new.
    pub fn attach(&self, builder: &mut HttpResponseBuilder) {
        if self.fresh {
            builder.cookie(
                Cookie::build(SESSION_COOKIE, self.id.clone())
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .finish(),
            );
        }
    }

    fn from_cookie(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(|uuid| Self {
            id: uuid.to_string(),
            fresh: false,
        })
    }
}

impl FromRequest for SessionId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let session = req
            .cookie(SESSION_COOKIE)
            .and_then(|cookie| Self::from_cookie(cookie.value()))
            .unwrap_or_else(Self::mint);
        ready(Ok(session))
    }
}
