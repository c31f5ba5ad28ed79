use actix_web::http::StatusCode;
use serde_json::Value;

use crate::common::client;

#[actix_web::test]
async fn health_reports_version_and_sessions() {
    let mut client = client().await;
    let reply = client.get("/health").await;
    assert_eq!(reply.status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["sessions"].is_u64());
    assert!(body["time"].as_str().is_some_and(|t| t.contains('T')));
    assert!(reply.session_cookie.is_none());
}
