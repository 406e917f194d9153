use std::sync::Arc;
use std::time::Duration;

use auth::AccessGate;
use auth::TokenLifetimes;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::me::me;
use super::handlers::refresh::refresh;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use super::handlers::validate::validate;
use super::middleware::require_access_token;
use crate::domain::user::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    /// Drives cookie Max-Age so cookies expire with their tokens.
    pub lifetimes: TokenLifetimes,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    access_gate: Arc<AccessGate>,
    lifetimes: TokenLifetimes,
) -> Router {
    let state = AppState {
        auth_service,
        lifetimes,
    };

    let public_routes = Router::new()
        .route("/signup", post(sign_up))
        .route("/signin", post(sign_in))
        .route("/refresh", post(refresh));

    let protected_routes = Router::new()
        .route("/validate", get(validate))
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(
            access_gate,
            require_access_token,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
