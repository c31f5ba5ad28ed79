#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::HeaderMap;
use actix_web::http::{Method, StatusCode};
use actix_web::test::{self, TestRequest};
use actix_web::Error as ActixError;
use backend_test_support::envelope::{assert_error_parts, assert_ok_parts};
use cards_backend::extractors::SESSION_COOKIE;
use cards_backend::infra::state::build_state;
use cards_backend::test_support::create_test_app_builder;
use serde_json::Value;


// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Response parts captured for assertions.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    pub session_cookie: Option<String>,
}

impl Reply {
    /// Assert a success envelope and return its `message`.
    pub fn message(&self) -> Value {
        assert_ok_parts(self.status, &self.headers, &self.body)
    }

    /// Assert an error envelope with the given status and message.
    pub fn assert_error(&self, status: StatusCode, message: &str) {
        assert_error_parts(self.status, &self.headers, &self.body, status, message);
    }

    /// Raw body text, for checks that depend on key order.
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).expect("response body should be valid UTF-8")
    }
}

/// A test app plus the session cookie of one simulated client.
pub struct Client<S> {
    app: S,
    session: Option<String>,
}

impl<S> Client<S>
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
{
    pub fn new(app: S) -> Self {
        Self { app, session: None }
    }

    /// Session id assigned by the server, once one was issued.
    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Forget the session cookie, as a fresh client would.
    pub fn forget_session(&mut self) {
        self.session = None;
    }

    pub async fn send(&mut self, mut req: TestRequest) -> Reply {
        if let Some(sid) = &self.session {
            req = req.cookie(actix_web::cookie::Cookie::new(SESSION_COOKIE, sid.clone()));
        }
        let resp = test::call_service(&self.app, req.to_request()).await;

        let status = resp.status();
        let headers = resp.headers().clone();
        let session_cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.value().to_string());
        let body = test::read_body(resp).await.to_vec();

        if let Some(sid) = &session_cookie {
            self.session = Some(sid.clone());
        }
        Reply {
            status,
            headers,
            body,
            session_cookie,
        }
    }

    pub async fn get(&mut self, uri: &str) -> Reply {
        self.send(TestRequest::get().uri(uri)).await
    }

    pub async fn call(&mut self, method: Method, uri: &str) -> Reply {
        self.send(TestRequest::default().method(method).uri(uri)).await
    }

    pub async fn json(&mut self, method: Method, uri: &str, body: Value) -> Reply {
        self.send(TestRequest::default().method(method).uri(uri).set_json(body))
            .await
    }
}

/// A client against the production routes with a fresh session store.
pub async fn client(
) -> Client<impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>>
{
    let app = create_test_app_builder(build_state().build())
        .with_prod_routes()
        .build()
        .await;
    Client::new(app)
}
