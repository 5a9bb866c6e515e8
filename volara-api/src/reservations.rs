use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde_json::json;
use volara_core::identity::User;
use volara_core::reservation::{NewReservation, ReservationDetail};
use volara_store::reservation_repo;

use crate::error::{booking, internal, AppError};
use crate::middleware::auth::{require_auth, CurrentUser};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(list_reservations).post(create_reservation))
        .route("/{id}", get(get_reservation).delete(delete_reservation))
        .route("/user/{user_id}", get(user_reservations))
        .layer(axum::middleware::from_fn_with_state(state, require_auth));

    Router::new()
        // Seat maps are public so the seat picker can render before login.
        .route("/vol/{vol_id}/reserved-seats", get(reserved_seats))
        .merge(protected)
}

async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationDetail>>, AppError> {
    let reservations = reservation_repo::list(&state.db.pool)
        .await
        .map_err(internal("list_reservations"))?;
    Ok(Json(reservations))
}

async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ReservationDetail>, AppError> {
    let reservation = reservation_repo::detail(&state.db.pool, id)
        .await
        .map_err(internal("get_reservation"))?
        .ok_or_else(|| AppError::NotFoundError("Réservation non trouvée".to_string()))?;
    Ok(Json(reservation))
}

/// A user sees their own reservations; admins see anyone's.
fn may_view_reservations(user: &User, owner: i32) -> bool {
    user.is_admin() || user.id_users == owner
}

async fn user_reservations(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<ReservationDetail>>, AppError> {
    if !may_view_reservations(&user, user_id) {
        return Err(AppError::AuthorizationError(
            "Accès non autorisé à ces réservations".to_string(),
        ));
    }
    let reservations = reservation_repo::list_by_user(&state.db.pool, user_id)
        .await
        .map_err(internal("user_reservations"))?;
    Ok(Json(reservations))
}

async fn create_reservation(
    State(state): State<AppState>,
    Json(req): Json<NewReservation>,
) -> Result<(StatusCode, Json<ReservationDetail>), AppError> {
    let reservation = volara_booking::create_reservation(&state.db.pool, &state.cabin, &req)
        .await
        .map_err(booking("create_reservation"))?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    volara_booking::cancel_reservation(&state.db.pool, id)
        .await
        .map_err(booking("cancel_reservation"))?;
    Ok(Json(json!({ "message": "Réservation supprimée avec succès" })))
}

async fn reserved_seats(
    State(state): State<AppState>,
    Path(vol_id): Path<i32>,
) -> Result<Json<Vec<i32>>, AppError> {
    let seats = reservation_repo::reserved_seats(&state.db.pool, vol_id)
        .await
        .map_err(internal("reserved_seats"))?;
    Ok(Json(seats))
}

#[cfg(test)]
mod tests {
    use super::may_view_reservations;
    use volara_core::identity::User;
    use volara_core::reservation::NewReservation;

    fn user(id: i32, role: &str) -> User {
        User {
            id_users: id,
            nom: "Martin".to_string(),
            prenom: "Claire".to_string(),
            email: "claire@example.com".to_string(),
            telephone: None,
            role: role.to_string(),
        }
    }

    #[test]
    fn users_only_see_their_own_reservations() {
        assert!(may_view_reservations(&user(7, "user"), 7));
        assert!(!may_view_reservations(&user(7, "user"), 8));
    }

    #[test]
    fn admins_see_any_users_reservations() {
        assert!(may_view_reservations(&user(1, "admin"), 7));
    }

    #[test]
    fn payload_with_explicit_seat() {
        let req: NewReservation =
            serde_json::from_value(serde_json::json!({
                "id_users": 1,
                "id_vol": 2,
                "place_reservee": 14
            }))
            .unwrap();
        assert_eq!(req.place_reservee, Some(14));
    }

    #[test]
    fn payload_without_seat_asks_for_a_random_one() {
        let req: NewReservation =
            serde_json::from_value(serde_json::json!({
                "id_users": 1,
                "id_vol": 2
            }))
            .unwrap();
        assert_eq!(req.place_reservee, None);
    }

    #[test]
    fn payload_missing_flight_is_rejected() {
        let res: Result<NewReservation, _> =
            serde_json::from_value(serde_json::json!({ "id_users": 1 }));
        assert!(res.is_err());
    }
}
