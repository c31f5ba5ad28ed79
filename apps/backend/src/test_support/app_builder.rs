//! Test service builder.
//! Given an AppState, build an initialized Actix **test service**.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error as ActixError;
use actix_web::{
    web::{self, ServiceConfig},
    App,
};

use crate::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use crate::state::app_state::AppState;

/// Function pointer for custom route configuration.
type RoutesFn = Box<dyn FnOnce(&mut ServiceConfig) + Send>;

pub fn create_test_app_builder(state: AppState) -> TestAppBuilder {
    TestAppBuilder {
        state,
        routes: None,
    }
}

pub struct TestAppBuilder {
    state: AppState,
    routes: Option<RoutesFn>,
}

impl TestAppBuilder {
    /// Use the application's production routes (the default).
    pub fn with_prod_routes(mut self) -> Self {
        self.routes = None;
        self
    }

    /// Use custom routes for a test.
    pub fn with_routes<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut ServiceConfig) + Send + 'static,
    {
        self.routes = Some(Box::new(f));
        self
    }

    /// Build and initialize the Actix test service, wrapped in the same
    /// tracing middleware as the server.
    pub async fn build(
        self,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>
    {
        let app = App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(self.state));

        let app = match self.routes {
            None => app.configure(crate::routes::configure),
            Some(f) => app.configure(f),
        };

        actix_web::test::init_service(app).await
    }
}
