use actix_web::http::Method;
use serde_json::json;

use crate::common::client;

#[actix_web::test]
async fn cookie_is_issued_once_and_reused() {
    let mut client = client().await;
    let first = client.get("/cards/list?page=1").await;
    let sid = first.session_cookie.clone().unwrap();
    assert_eq!(client.session(), Some(sid.as_str()));

    let second = client.get("/cards/list?page=1").await;
    assert!(second.session_cookie.is_none());
}

#[actix_web::test]
async fn sessions_are_isolated() {
    let mut client = client().await;
    client.get("/cards/list?page=1").await.message();
    client
        .json(Method::POST, "/cards/create", json!({"name": "Mine", "power": 1}))
        .await
        .message();
    assert!(client.get("/cards/list?page=2").await.message()["Mine"].is_i64());

    client.forget_session();
    let page = client.get("/cards/list?page=2").await.message();
    assert!(page.get("Mine").is_none());
}

#[actix_web::test]
async fn failed_request_leaves_the_session_untouched() {
    let mut client = client().await;
    client.call(Method::POST, "/user/create").await.message();
    client
        .json(Method::PUT, "/user/addcard", json!({"card_name": "Unknown"}))
        .await;
    assert_eq!(
        client.get("/user/list").await.text(),
        r#"{"message":{"deck":{},"total_power":0},"status":"OK"}"#
    );
}
