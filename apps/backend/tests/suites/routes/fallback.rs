use actix_web::http::{Method, StatusCode};

use crate::common::client;

#[actix_web::test]
async fn welcome_on_default_paths_for_any_method() {
    let mut client = client().await;
    for uri in ["/", "/default", "/default/index"] {
        assert_eq!(client.get(uri).await.message(), "Welcome to the Cards App!");
    }
    assert_eq!(
        client.call(Method::DELETE, "/").await.message(),
        "Welcome to the Cards App!"
    );
}

#[actix_web::test]
async fn unknown_paths_are_not_found() {
    let mut client = client().await;
    for uri in ["/nope", "/cards/shuffle", "/user/list/extra"] {
        client
            .get(uri)
            .await
            .assert_error(StatusCode::NOT_FOUND, "Page does not exist.");
    }
}

#[actix_web::test]
async fn wrong_method_names_the_allowed_one() {
    let mut client = client().await;
    let cases = [
        (Method::POST, "/cards/list", "GET"),
        (Method::GET, "/cards/create", "POST"),
        (Method::POST, "/cards/update", "PUT"),
        (Method::PUT, "/cards/remove", "DELETE"),
        (Method::DELETE, "/cards", "GET"),
        (Method::POST, "/user/list", "GET"),
        (Method::GET, "/user/create", "POST"),
        (Method::POST, "/user/addcard", "PUT"),
        (Method::GET, "/user/removecard", "DELETE"),
    ];
    for (method, uri, allowed) in cases {
        client.call(method, uri).await.assert_error(
            StatusCode::METHOD_NOT_ALLOWED,
            &format!("Only {allowed} HTTP method allowed."),
        );
    }
}
