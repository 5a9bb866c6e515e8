use sqlx::PgPool;
use volara_core::passenger::{NewPassenger, Passenger, PassengerUpdate, ReservationPassenger};

use crate::error::StoreError;

pub async fn list(pool: &PgPool) -> Result<Vec<Passenger>, StoreError> {
    let rows = sqlx::query_as::<_, Passenger>("SELECT * FROM passagers ORDER BY id_passager")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get(pool: &PgPool, id: i32) -> Result<Option<Passenger>, StoreError> {
    let row = sqlx::query_as::<_, Passenger>("SELECT * FROM passagers WHERE id_passager = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn list_by_reservation(
    pool: &PgPool,
    id_reservation: i32,
) -> Result<Vec<ReservationPassenger>, StoreError> {
    let rows = sqlx::query_as::<_, ReservationPassenger>(
        "SELECT p.id_passager, p.id_reservation, p.nom, p.prenom, p.numero_passeport, \
                r.place_reservee \
         FROM passagers p \
         JOIN reservations r ON p.id_reservation = r.id_reservation \
         WHERE p.id_reservation = $1",
    )
    .bind(id_reservation)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(pool: &PgPool, new: &NewPassenger) -> Result<Passenger, StoreError> {
    let row = sqlx::query_as::<_, Passenger>(
        "INSERT INTO passagers (id_reservation, nom, prenom, numero_passeport) \
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(new.id_reservation)
    .bind(&new.nom)
    .bind(&new.prenom)
    .bind(&new.numero_passeport)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    upd: &PassengerUpdate,
) -> Result<Option<Passenger>, StoreError> {
    let row = sqlx::query_as::<_, Passenger>(
        "UPDATE passagers SET nom = $1, prenom = $2, numero_passeport = $3 \
         WHERE id_passager = $4 RETURNING *",
    )
    .bind(&upd.nom)
    .bind(&upd.prenom)
    .bind(&upd.numero_passeport)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM passagers WHERE id_passager = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
