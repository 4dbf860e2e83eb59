use std::any::Any;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{header, HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
};

use crate::{
    config::AppConfig, error::ApiError, handlers, metrics_handler,
    observability::request_logger, state::AppState,
};

pub fn observability_routes() -> Router<AppState> {
    Router::new().route(
        "/metrics",
        get(metrics_handler::metrics_endpoint).fallback(handlers::route_not_found),
    )
}

pub fn investment_routes() -> Router<AppState> {
    Router::new().route(
        "/api/investment",
        post(handlers::submit_investment).fallback(handlers::route_not_found),
    )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route(
        "/api/health",
        get(handlers::health_check).fallback(handlers::route_not_found),
    )
}

pub fn country_routes() -> Router<AppState> {
    Router::new().route(
        "/api/countries",
        get(handlers::list_countries).fallback(handlers::route_not_found),
    )
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(investment_routes())
        .merge(health_routes())
        .merge(country_routes())
        .merge(observability_routes())
}

/// The complete application
pub fn app(state: AppState) -> Router {
    finish(api_routes(), state)
}

/// Attach the fallback, the panic guard, request logging and CORS to `routes`.
///
/// A wrong method on a known path answers like an unknown path: 404.
pub fn finish(routes: Router<AppState>, state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let routes = if state.config.serve_static() {
        let assets = ServeDir::new(&state.config.static_dir)
            .call_fallback_on_method_not_allowed(true)
            .fallback(handlers::route_not_found.into_service());
        routes.fallback_service(assets)
    } else {
        routes.fallback(handlers::route_not_found)
    };

    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(origin = %origin, error = %err, "skipping invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Last-resort translation of a handler panic into the 500 envelope
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::internal(format!("panic: {}", detail)).into_response()
}
