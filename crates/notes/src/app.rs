use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        error::{handle_panic, json_timeout, route_not_found},
        notes::{create_note, get_note, list_notes},
        root::banner,
    },
    state::AppState,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    let routes = Router::new()
        .route("/", get(banner))
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", get(get_note))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found);

    with_middleware(routes, config).with_state(state)
}

/// Wraps `router` in the shared middleware stack, innermost layer first.
fn with_middleware(router: Router<AppState>, config: &Config) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(middleware::map_response(json_timeout))
        .layer(cors_layer(&config.allowed_origins))
}

/// Credentialed CORS restricted to the configured origins.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
