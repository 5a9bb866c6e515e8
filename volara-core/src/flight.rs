use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled route with a fixed seat capacity and a price. Field names are
/// the wire/column names the original API exposed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Flight {
    pub id_vol: i32,
    pub numero_vol: String,
    pub origine: String,
    pub destination: String,
    pub date_depart: DateTime<Utc>,
    pub date_arrive: DateTime<Utc>,
    pub prix: f64,
    pub places_disponibles: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewFlight {
    pub numero_vol: String,
    pub origine: String,
    pub destination: String,
    pub date_depart: DateTime<Utc>,
    pub date_arrive: DateTime<Utc>,
    pub prix: f64,
    pub places_disponibles: i32,
}

/// Search filter: substring match on origin/destination, exact match on the
/// departure date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightSearch {
    pub origine: Option<String>,
    pub destination: Option<String>,
    pub date_depart: Option<NaiveDate>,
}

/// Flight joined with how much booking activity it carries.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FlightWithBookings {
    pub id_vol: i32,
    pub numero_vol: String,
    pub origine: String,
    pub destination: String,
    pub date_depart: DateTime<Utc>,
    pub date_arrive: DateTime<Utc>,
    pub prix: f64,
    pub places_disponibles: i32,
    pub nombre_reservations: i64,
    pub nombre_passagers: i64,
}
