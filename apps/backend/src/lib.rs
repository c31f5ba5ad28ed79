#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod protocol;
pub mod routes;
pub mod services;
pub mod state;
pub mod test_support;
pub mod trace_ctx;

// Re-exports for public API
pub use config::ServerConfig;
pub use error::AppError;
pub use errors::{DomainError, ErrorCode, ValidationKind};
pub use infra::state::{build_state, StateBuilder};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use services::{CardDeckService, UserDeckService};
pub use state::app_state::AppState;
pub use state::session_store::SessionStore;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
