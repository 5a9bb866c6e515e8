use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Payment {
    pub id_paiement: i32,
    pub id_reservation: i32,
    pub montant: f64,
    pub montant_total: Option<f64>,
    pub date_paiement: DateTime<Utc>,
    pub mode_paiement: String,
    pub type_paiement: String,
    pub statut: String,
}

/// Payment joined with the user and flight of its reservation.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PaymentWithReservation {
    pub id_paiement: i32,
    pub id_reservation: i32,
    pub montant: f64,
    pub montant_total: Option<f64>,
    pub date_paiement: DateTime<Utc>,
    pub mode_paiement: String,
    pub type_paiement: String,
    pub statut: String,
    pub id_users: i32,
    pub id_vol: i32,
}

#[derive(Debug, Deserialize)]
pub struct NewPayment {
    pub id_reservation: i32,
    pub montant: f64,
    pub montant_total: Option<f64>,
    pub mode_paiement: String,
    pub type_paiement: Option<String>,
    pub statut: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PaymentUpdate {
    pub montant: f64,
    pub montant_total: Option<f64>,
    pub mode_paiement: String,
    pub type_paiement: Option<String>,
    pub statut: Option<String>,
}

/// Aggregate figures for the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
pub struct PaymentStats {
    pub total_paiements: i64,
    pub montant_total: f64,
    pub paiements_complets: i64,
    pub paiements_partiels: i64,
    pub paiements_depart: i64,
    pub paiements_completes: i64,
    pub paiements_en_attente: i64,
}
