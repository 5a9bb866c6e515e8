use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A booking binding one user to one flight and one seat.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Reservation {
    pub id_reservation: i32,
    pub id_users: i32,
    pub id_vol: i32,
    pub place_reservee: Option<i32>,
    pub date_reservation: DateTime<Utc>,
}

/// Reservation joined with the summary fields of its flight; the shape every
/// reservation read endpoint returns.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReservationDetail {
    pub id_reservation: i32,
    pub id_users: i32,
    pub id_vol: i32,
    pub place_reservee: Option<i32>,
    pub date_reservation: DateTime<Utc>,
    pub numero_vol: String,
    pub origine: String,
    pub destination: String,
    pub date_depart: DateTime<Utc>,
    pub date_arrive: DateTime<Utc>,
    pub prix: f64,
}

/// Validated creation request. The seat is the only genuinely optional
/// field; omitting it asks for a random free seat.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReservation {
    pub id_users: i32,
    pub id_vol: i32,
    pub place_reservee: Option<i32>,
}
