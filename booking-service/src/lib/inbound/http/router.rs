use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_user::create_user;
use super::handlers::delete_user::delete_user;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::rooms::create_room;
use super::handlers::rooms::delete_room;
use super::handlers::rooms::list_rooms;
use super::handlers::subjects::create_subject;
use super::handlers::subjects::delete_subject;
use super::handlers::subjects::list_subjects;
use super::handlers::verify_token::verify_token;
use crate::domain::room::service::RoomService;
use crate::domain::subject::service::SubjectService;
use crate::domain::user::service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub room_service: Arc<RoomService>,
    pub subject_service: Arc<SubjectService>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService>,
    room_service: Arc<RoomService>,
    subject_service: Arc<SubjectService>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        room_service,
        subject_service,
        authenticator,
    };

    // Admin gating happens per-handler through the guard extractors, so
    // public and protected routes live on the same router
    let api_routes = Router::new()
        .route("/api/auth/token", post(login))
        .route("/api/auth/verify-token", get(verify_token))
        .route(
            "/api/users",
            get(list_users).post(create_user).delete(delete_user),
        )
        .route(
            "/api/rooms",
            get(list_rooms).post(create_room).delete(delete_room),
        )
        .route(
            "/api/subjects",
            get(list_subjects)
                .post(create_subject)
                .delete(delete_subject),
        );

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
        .merge(api_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
