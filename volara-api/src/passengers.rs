use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;
use volara_core::passenger::{NewPassenger, Passenger, PassengerUpdate, ReservationPassenger};
use volara_store::passenger_repo;

use crate::error::{internal, AppError};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_passengers).post(create_passenger))
        .route(
            "/{id}",
            get(get_passenger).put(update_passenger).delete(delete_passenger),
        )
        .route("/reservation/{reservation_id}", get(reservation_passengers))
        .layer(axum::middleware::from_fn_with_state(state, require_auth))
}

async fn list_passengers(State(state): State<AppState>) -> Result<Json<Vec<Passenger>>, AppError> {
    let passengers = passenger_repo::list(&state.db.pool)
        .await
        .map_err(internal("list_passengers"))?;
    Ok(Json(passengers))
}

async fn get_passenger(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Passenger>, AppError> {
    let passenger = passenger_repo::get(&state.db.pool, id)
        .await
        .map_err(internal("get_passenger"))?
        .ok_or_else(|| AppError::NotFoundError("Passager non trouvé".to_string()))?;
    Ok(Json(passenger))
}

async fn reservation_passengers(
    State(state): State<AppState>,
    Path(reservation_id): Path<i32>,
) -> Result<Json<Vec<ReservationPassenger>>, AppError> {
    let passengers = passenger_repo::list_by_reservation(&state.db.pool, reservation_id)
        .await
        .map_err(internal("reservation_passengers"))?;
    Ok(Json(passengers))
}

async fn create_passenger(
    State(state): State<AppState>,
    Json(new): Json<NewPassenger>,
) -> Result<(StatusCode, Json<Passenger>), AppError> {
    let passenger = passenger_repo::create(&state.db.pool, &new)
        .await
        .map_err(|e| {
            if e.is_foreign_key_violation() {
                AppError::NotFoundError("Réservation non trouvée".to_string())
            } else {
                internal("create_passenger")(e)
            }
        })?;
    Ok((StatusCode::CREATED, Json(passenger)))
}

async fn update_passenger(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(upd): Json<PassengerUpdate>,
) -> Result<Json<Passenger>, AppError> {
    let passenger = passenger_repo::update(&state.db.pool, id, &upd)
        .await
        .map_err(internal("update_passenger"))?
        .ok_or_else(|| AppError::NotFoundError("Passager non trouvé".to_string()))?;
    Ok(Json(passenger))
}

async fn delete_passenger(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    if passenger_repo::delete(&state.db.pool, id)
        .await
        .map_err(internal("delete_passenger"))?
        == 0
    {
        return Err(AppError::NotFoundError("Passager non trouvé".to_string()));
    }
    Ok(Json(json!({ "message": "Passager supprimé avec succès" })))
}
