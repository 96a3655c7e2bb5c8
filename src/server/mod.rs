mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer, extract::Extension, routing::get, BoxError, Router,
};
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{DynAPI, API};
use crate::config::Config;
use crate::error::{server_error, timeout_error, unexpected_error, Error};
use crate::server::handlers::pois;

pub fn router(api: DynAPI, request_timeout: Duration) -> Router {
    // any origin, method and header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .timeout(request_timeout);

    Router::new()
        .route("/api/pois", get(pois::list).post(pois::create))
        .route(
            "/api/pois/:id",
            get(pois::find).put(pois::update).delete(pois::delete),
        )
        .layer(Extension(api))
        .layer(middleware)
}

pub async fn serve<T: API + Sync + Send + 'static>(
    api: T,
    config: &Config,
) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;

    let app = router(api, config.request_timeout);

    tracing::info!("listening on {}", config.bind_addr);

    axum::Server::try_bind(&config.bind_addr)
        .map_err(server_error)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(server_error)
}

async fn handle_middleware_error(err: BoxError) -> Error {
    if err.is::<Elapsed>() {
        return timeout_error();
    }

    tracing::error!("unhandled middleware error: {}", err);
    unexpected_error()
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", err);
    }

    tracing::info!("shutting down");
}
