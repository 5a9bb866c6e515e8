use sqlx::PgPool;
use volara_core::payment::{NewPayment, Payment, PaymentStats, PaymentUpdate, PaymentWithReservation};

use crate::error::StoreError;

pub async fn list(pool: &PgPool) -> Result<Vec<PaymentWithReservation>, StoreError> {
    let rows = sqlx::query_as::<_, PaymentWithReservation>(
        "SELECT p.*, r.id_users, r.id_vol \
         FROM paiements p \
         JOIN reservations r ON p.id_reservation = r.id_reservation \
         ORDER BY p.date_paiement DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get(pool: &PgPool, id: i32) -> Result<Option<PaymentWithReservation>, StoreError> {
    let row = sqlx::query_as::<_, PaymentWithReservation>(
        "SELECT p.*, r.id_users, r.id_vol \
         FROM paiements p \
         JOIN reservations r ON p.id_reservation = r.id_reservation \
         WHERE p.id_paiement = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn list_by_reservation(
    pool: &PgPool,
    id_reservation: i32,
) -> Result<Vec<Payment>, StoreError> {
    let rows = sqlx::query_as::<_, Payment>("SELECT * FROM paiements WHERE id_reservation = $1")
        .bind(id_reservation)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &PgPool, new: &NewPayment) -> Result<Payment, StoreError> {
    let row = sqlx::query_as::<_, Payment>(
        "INSERT INTO paiements (id_reservation, montant, montant_total, mode_paiement, type_paiement, statut) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(new.id_reservation)
    .bind(new.montant)
    .bind(new.montant_total.unwrap_or(new.montant))
    .bind(&new.mode_paiement)
    .bind(new.type_paiement.as_deref().unwrap_or("complet"))
    .bind(new.statut.as_deref().unwrap_or("complete"))
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(pool: &PgPool, id: i32, upd: &PaymentUpdate) -> Result<Option<Payment>, StoreError> {
    let row = sqlx::query_as::<_, Payment>(
        "UPDATE paiements SET montant = $1, montant_total = $2, mode_paiement = $3, \
         type_paiement = $4, statut = $5 WHERE id_paiement = $6 RETURNING *",
    )
    .bind(upd.montant)
    .bind(upd.montant_total.unwrap_or(upd.montant))
    .bind(&upd.mode_paiement)
    .bind(upd.type_paiement.as_deref().unwrap_or("complet"))
    .bind(upd.statut.as_deref().unwrap_or("complete"))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM paiements WHERE id_paiement = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Aggregate counts and totals across every payment. All zeros over an empty
/// table.
pub async fn stats(pool: &PgPool) -> Result<PaymentStats, StoreError> {
    let stats = sqlx::query_as::<_, PaymentStats>(
        "SELECT COUNT(*) AS total_paiements, \
                COALESCE(SUM(montant), 0) AS montant_total, \
                COUNT(*) FILTER (WHERE type_paiement = 'complet') AS paiements_complets, \
                COUNT(*) FILTER (WHERE type_paiement = 'partiel') AS paiements_partiels, \
                COUNT(*) FILTER (WHERE type_paiement = 'depart') AS paiements_depart, \
                COUNT(*) FILTER (WHERE statut = 'complete') AS paiements_completes, \
                COUNT(*) FILTER (WHERE statut = 'en_attente') AS paiements_en_attente \
         FROM paiements",
    )
    .fetch_one(pool)
    .await?;
    Ok(stats)
}
