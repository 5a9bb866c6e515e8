use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;
use volara_core::payment::{NewPayment, Payment, PaymentStats, PaymentUpdate, PaymentWithReservation};
use volara_store::payment_repo;

use crate::error::{internal, AppError};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_payments).post(create_payment))
        .route("/stats", get(payment_stats))
        .route(
            "/{id}",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
        .route("/reservation/{reservation_id}", get(reservation_payments))
        .layer(axum::middleware::from_fn_with_state(state, require_auth))
}

async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentWithReservation>>, AppError> {
    let payments = payment_repo::list(&state.db.pool)
        .await
        .map_err(internal("list_payments"))?;
    Ok(Json(payments))
}

async fn payment_stats(State(state): State<AppState>) -> Result<Json<PaymentStats>, AppError> {
    let stats = payment_repo::stats(&state.db.pool)
        .await
        .map_err(internal("payment_stats"))?;
    Ok(Json(stats))
}

async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PaymentWithReservation>, AppError> {
    let payment = payment_repo::get(&state.db.pool, id)
        .await
        .map_err(internal("get_payment"))?
        .ok_or_else(|| AppError::NotFoundError("Paiement non trouvé".to_string()))?;
    Ok(Json(payment))
}

async fn reservation_payments(
    State(state): State<AppState>,
    Path(reservation_id): Path<i32>,
) -> Result<Json<Vec<Payment>>, AppError> {
    let payments = payment_repo::list_by_reservation(&state.db.pool, reservation_id)
        .await
        .map_err(internal("reservation_payments"))?;
    Ok(Json(payments))
}

async fn create_payment(
    State(state): State<AppState>,
    Json(new): Json<NewPayment>,
) -> Result<(StatusCode, Json<Payment>), AppError> {
    if new.montant < 0.0 {
        return Err(AppError::ValidationError(
            "Le montant doit être positif".to_string(),
        ));
    }
    let payment = payment_repo::create(&state.db.pool, &new).await.map_err(|e| {
        if e.is_foreign_key_violation() {
            AppError::NotFoundError("Réservation non trouvée".to_string())
        } else {
            internal("create_payment")(e)
        }
    })?;
    Ok((StatusCode::CREATED, Json(payment)))
}

async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(upd): Json<PaymentUpdate>,
) -> Result<Json<Payment>, AppError> {
    let payment = payment_repo::update(&state.db.pool, id, &upd)
        .await
        .map_err(internal("update_payment"))?
        .ok_or_else(|| AppError::NotFoundError("Paiement non trouvé".to_string()))?;
    Ok(Json(payment))
}

async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    if payment_repo::delete(&state.db.pool, id)
        .await
        .map_err(internal("delete_payment"))?
        == 0
    {
        return Err(AppError::NotFoundError("Paiement non trouvé".to_string()));
    }
    Ok(Json(json!({ "message": "Paiement supprimé avec succès" })))
}
