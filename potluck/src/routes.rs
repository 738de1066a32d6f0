use crate::{handlers, state::AppState};
use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

const X_CLIENT_INFO: HeaderName = HeaderName::from_static("x-client-info");
const APIKEY: HeaderName = HeaderName::from_static("apikey");

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, X_CLIENT_INFO, APIKEY, header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/functions/v1/calculate-split",
            post(handlers::calculate_split),
        )
        .route("/calculate-split", post(handlers::calculate_split))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
