use sqlx::{PgExecutor, PgPool};
use volara_core::reservation::ReservationDetail;

use crate::error::StoreError;

const DETAIL_SELECT: &str = "SELECT r.id_reservation, r.id_users, r.id_vol, r.place_reservee, \
                             r.date_reservation, v.numero_vol, v.origine, v.destination, \
                             v.date_depart, v.date_arrive, v.prix \
                             FROM reservations r JOIN vols v ON r.id_vol = v.id_vol";

pub async fn list(pool: &PgPool) -> Result<Vec<ReservationDetail>, StoreError> {
    let rows = sqlx::query_as::<_, ReservationDetail>(&format!(
        "{DETAIL_SELECT} ORDER BY r.date_reservation DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn detail(
    executor: impl PgExecutor<'_>,
    id: i32,
) -> Result<Option<ReservationDetail>, StoreError> {
    let row = sqlx::query_as::<_, ReservationDetail>(&format!(
        "{DETAIL_SELECT} WHERE r.id_reservation = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(row)
}

pub async fn list_by_user(pool: &PgPool, id_users: i32) -> Result<Vec<ReservationDetail>, StoreError> {
    let rows = sqlx::query_as::<_, ReservationDetail>(&format!(
        "{DETAIL_SELECT} WHERE r.id_users = $1 ORDER BY r.date_reservation DESC"
    ))
    .bind(id_users)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Seat numbers currently held on a flight. Callable inside or outside a
/// transaction; the booking engine reads it inside one.
pub async fn reserved_seats(
    executor: impl PgExecutor<'_>,
    id_vol: i32,
) -> Result<Vec<i32>, StoreError> {
    let seats = sqlx::query_scalar::<_, i32>(
        "SELECT place_reservee FROM reservations \
         WHERE id_vol = $1 AND place_reservee IS NOT NULL",
    )
    .bind(id_vol)
    .fetch_all(executor)
    .await?;
    Ok(seats)
}

/// Insert a reservation row and return its id. A unique violation here means
/// a concurrent transaction claimed the same seat.
pub async fn insert(
    executor: impl PgExecutor<'_>,
    id_users: i32,
    id_vol: i32,
    place_reservee: i32,
) -> Result<i32, StoreError> {
    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO reservations (id_users, id_vol, place_reservee, date_reservation) \
         VALUES ($1, $2, $3, CURRENT_TIMESTAMP) RETURNING id_reservation",
    )
    .bind(id_users)
    .bind(id_vol)
    .bind(place_reservee)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

/// Flight reference of a reservation, if the reservation still exists.
pub async fn flight_of(executor: impl PgExecutor<'_>, id: i32) -> Result<Option<i32>, StoreError> {
    let id_vol =
        sqlx::query_scalar::<_, i32>("SELECT id_vol FROM reservations WHERE id_reservation = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
    Ok(id_vol)
}

pub async fn delete(executor: impl PgExecutor<'_>, id: i32) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM reservations WHERE id_reservation = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
