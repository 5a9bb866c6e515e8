use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;
use volara_core::flight::{Flight, FlightSearch, FlightWithBookings, NewFlight};
use volara_core::passenger::FlightPassenger;
use volara_store::flight_repo;

use crate::error::{internal, AppError};
use crate::middleware::auth::{require_auth, AdminUser};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/with-reservations/list", get(with_reservations))
        .route("/{id}/passagers", get(flight_passengers))
        .layer(axum::middleware::from_fn_with_state(state, require_auth));

    // "/" and "/{id}" mix public reads with admin writes, so the admin gate
    // is the AdminUser extractor rather than a router-wide layer.
    Router::new()
        .route("/", get(list_flights).post(create_flight))
        .route("/search", get(search_flights))
        .route(
            "/{id}",
            get(get_flight).put(update_flight).delete(delete_flight),
        )
        .merge(protected)
}

async fn list_flights(State(state): State<AppState>) -> Result<Json<Vec<Flight>>, AppError> {
    let flights = flight_repo::list(&state.db.pool)
        .await
        .map_err(internal("list_flights"))?;
    Ok(Json(flights))
}

async fn search_flights(
    State(state): State<AppState>,
    Query(criteria): Query<FlightSearch>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let flights = flight_repo::search(&state.db.pool, &criteria)
        .await
        .map_err(internal("search_flights"))?;
    Ok(Json(flights))
}

async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Flight>, AppError> {
    let flight = flight_repo::get(&state.db.pool, id)
        .await
        .map_err(internal("get_flight"))?
        .ok_or_else(|| AppError::NotFoundError("Vol non trouvé".to_string()))?;
    Ok(Json(flight))
}

async fn create_flight(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(new): Json<NewFlight>,
) -> Result<(StatusCode, Json<Flight>), AppError> {
    if new.places_disponibles < 0 {
        return Err(AppError::ValidationError(
            "Le nombre de places doit être positif".to_string(),
        ));
    }
    let flight = flight_repo::create(&state.db.pool, &new)
        .await
        .map_err(internal("create_flight"))?;
    Ok((StatusCode::CREATED, Json(flight)))
}

async fn update_flight(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(upd): Json<NewFlight>,
) -> Result<Json<Flight>, AppError> {
    let flight = flight_repo::update(&state.db.pool, id, &upd)
        .await
        .map_err(internal("update_flight"))?
        .ok_or_else(|| AppError::NotFoundError("Vol non trouvé".to_string()))?;
    Ok(Json(flight))
}

/// Deleting a flight cascades its reservations (and their passengers and
/// payments) at the store level.
async fn delete_flight(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    if flight_repo::delete(&state.db.pool, id)
        .await
        .map_err(internal("delete_flight"))?
        == 0
    {
        return Err(AppError::NotFoundError("Vol non trouvé".to_string()));
    }
    Ok(Json(json!({ "message": "Vol supprimé avec succès" })))
}

async fn with_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<FlightWithBookings>>, AppError> {
    let flights = flight_repo::with_reservations(&state.db.pool)
        .await
        .map_err(internal("with_reservations"))?;
    Ok(Json(flights))
}

async fn flight_passengers(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<FlightPassenger>>, AppError> {
    let passengers = flight_repo::passengers(&state.db.pool, id)
        .await
        .map_err(internal("flight_passengers"))?;
    Ok(Json(passengers))
}
