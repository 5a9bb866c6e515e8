use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};
use volara_core::flight::{Flight, FlightSearch, FlightWithBookings, NewFlight};
use volara_core::passenger::FlightPassenger;

use crate::error::StoreError;

pub async fn list(pool: &PgPool) -> Result<Vec<Flight>, StoreError> {
    let flights = sqlx::query_as::<_, Flight>("SELECT * FROM vols ORDER BY date_depart")
        .fetch_all(pool)
        .await?;
    Ok(flights)
}

pub async fn get(executor: impl PgExecutor<'_>, id: i32) -> Result<Option<Flight>, StoreError> {
    let flight = sqlx::query_as::<_, Flight>("SELECT * FROM vols WHERE id_vol = $1")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(flight)
}

pub async fn create(pool: &PgPool, new: &NewFlight) -> Result<Flight, StoreError> {
    let flight = sqlx::query_as::<_, Flight>(
        "INSERT INTO vols (numero_vol, origine, destination, date_depart, date_arrive, prix, places_disponibles) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(&new.numero_vol)
    .bind(&new.origine)
    .bind(&new.destination)
    .bind(new.date_depart)
    .bind(new.date_arrive)
    .bind(new.prix)
    .bind(new.places_disponibles)
    .fetch_one(pool)
    .await?;
    Ok(flight)
}

pub async fn update(pool: &PgPool, id: i32, upd: &NewFlight) -> Result<Option<Flight>, StoreError> {
    let flight = sqlx::query_as::<_, Flight>(
        "UPDATE vols SET numero_vol = $1, origine = $2, destination = $3, date_depart = $4, \
         date_arrive = $5, prix = $6, places_disponibles = $7 WHERE id_vol = $8 RETURNING *",
    )
    .bind(&upd.numero_vol)
    .bind(&upd.origine)
    .bind(&upd.destination)
    .bind(upd.date_depart)
    .bind(upd.date_arrive)
    .bind(upd.prix)
    .bind(upd.places_disponibles)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(flight)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM vols WHERE id_vol = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn search(pool: &PgPool, criteria: &FlightSearch) -> Result<Vec<Flight>, StoreError> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM vols WHERE 1=1");

    if let Some(origine) = &criteria.origine {
        qb.push(" AND origine ILIKE ");
        qb.push_bind(format!("%{origine}%"));
    }
    if let Some(destination) = &criteria.destination {
        qb.push(" AND destination ILIKE ");
        qb.push_bind(format!("%{destination}%"));
    }
    if let Some(date) = criteria.date_depart {
        qb.push(" AND date_depart::date = ");
        qb.push_bind(date);
    }
    qb.push(" ORDER BY date_depart");

    let flights = qb.build_query_as::<Flight>().fetch_all(pool).await?;
    Ok(flights)
}

/// Flights that carry at least one reservation, with reservation and
/// passenger counts.
pub async fn with_reservations(pool: &PgPool) -> Result<Vec<FlightWithBookings>, StoreError> {
    let flights = sqlx::query_as::<_, FlightWithBookings>(
        "SELECT v.*, \
                COUNT(DISTINCT r.id_reservation) AS nombre_reservations, \
                COUNT(DISTINCT p.id_passager) AS nombre_passagers \
         FROM vols v \
         JOIN reservations r ON v.id_vol = r.id_vol \
         LEFT JOIN passagers p ON r.id_reservation = p.id_reservation \
         GROUP BY v.id_vol \
         ORDER BY v.date_depart",
    )
    .fetch_all(pool)
    .await?;
    Ok(flights)
}

/// Passenger manifest for one flight, including seats and booking accounts.
pub async fn passengers(pool: &PgPool, id_vol: i32) -> Result<Vec<FlightPassenger>, StoreError> {
    let rows = sqlx::query_as::<_, FlightPassenger>(
        "SELECT p.id_passager, p.id_reservation, p.nom, p.prenom, p.numero_passeport, \
                r.place_reservee, \
                u.nom AS nom_utilisateur, u.prenom AS prenom_utilisateur, u.email \
         FROM passagers p \
         JOIN reservations r ON p.id_reservation = r.id_reservation \
         JOIN users u ON r.id_users = u.id_users \
         WHERE r.id_vol = $1 \
         ORDER BY p.nom, p.prenom",
    )
    .bind(id_vol)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Take one seat of capacity, guarded so the counter never goes below zero.
/// `None` means the flight is missing or already at zero; in either case no
/// row was touched.
pub async fn decrement_if_positive(
    executor: impl PgExecutor<'_>,
    id_vol: i32,
) -> Result<Option<Flight>, StoreError> {
    let flight = sqlx::query_as::<_, Flight>(
        "UPDATE vols SET places_disponibles = places_disponibles - 1 \
         WHERE id_vol = $1 AND places_disponibles > 0 RETURNING *",
    )
    .bind(id_vol)
    .fetch_optional(executor)
    .await?;
    Ok(flight)
}

/// Give one seat of capacity back after a cancellation.
pub async fn increment_seats(executor: impl PgExecutor<'_>, id_vol: i32) -> Result<(), StoreError> {
    sqlx::query("UPDATE vols SET places_disponibles = places_disponibles + 1 WHERE id_vol = $1")
        .bind(id_vol)
        .execute(executor)
        .await?;
    Ok(())
}
