use axum::{http::Method, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod flights;
pub mod middleware;
pub mod passengers;
pub mod payments;
pub mod reservations;
pub mod state;
pub mod users;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/", get(banner))
        .nest("/api/users", users::routes(state.clone()))
        .nest("/api/vols", flights::routes(state.clone()))
        .nest("/api/reservations", reservations::routes(state.clone()))
        .nest("/api/passagers", passengers::routes(state.clone()))
        .nest("/api/paiements", payments::routes(state.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn banner() -> &'static str {
    "API de Gestion de Réservation de Billets d'Avion"
}
