use actix_web::{web, App, HttpServer};
use cards_backend::config::ServerConfig;
use cards_backend::infra::state::StateBuilder;
use cards_backend::middleware::{
    cors_middleware, RequestTrace, StructuredLogger, TraceSpan,
};
use cards_backend::routes;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(StateBuilder::from_config(&config).build());
    let origins = config.cors_allowed_origins.clone();

    info!(
        host = %config.host,
        port = config.port,
        session_ttl_secs = config.session_ttl.as_secs(),
        "Starting Cards backend"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
