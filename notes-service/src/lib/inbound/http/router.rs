use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::account;
use super::handlers::categories;
use super::handlers::health::health_check;
use super::handlers::notes;
use super::middleware::require_auth;
use crate::domain::category::ports::CategoryServicePort;
use crate::domain::note::ports::NoteServicePort;
use crate::domain::user::ports::UserServicePort;

/// Shared state for all HTTP handlers.
///
/// Services are held as trait objects so the router can be assembled over any
/// repository implementation.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub note_service: Arc<dyn NoteServicePort>,
    pub category_service: Arc<dyn CategoryServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    note_service: Arc<dyn NoteServicePort>,
    category_service: Arc<dyn CategoryServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        note_service,
        category_service,
    };

    let public_routes = Router::new()
        .route("/api", get(health_check))
        .route("/api/health", get(health_check))
        .route("/api/auth/signup", post(account::signup))
        .route("/api/auth/login", post(account::login));

    let protected_routes = Router::new()
        .route(
            "/api/auth/whoami",
            get(account::whoami).delete(account::delete_account),
        )
        .route("/api/notes", get(notes::list_notes).post(notes::create_note))
        .route(
            "/api/notes/:note_id",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route("/api/notes/:note_id/tags", post(notes::add_tag))
        .route(
            "/api/notes/:note_id/tags/:tag_name",
            delete(notes::remove_tag),
        )
        .route("/api/tags", get(notes::list_tags))
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/categories/:category_id",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route_layer(middleware::from_fn_with_state(authenticator, require_auth));

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
