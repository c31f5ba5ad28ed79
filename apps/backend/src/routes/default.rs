use actix_web::{web, HttpResponse};

use crate::protocol::envelope::ApiResponse;

pub const WELCOME: &str = "Welcome to the Cards App!";

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(WELCOME))
}

/// `/`, `/default` and `/default/index` answer any method.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(["/", "/default", "/default/index"]).route(web::route().to(index)));
}
