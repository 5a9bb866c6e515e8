use serde::{Deserialize, Serialize};

/// A traveller attached to a reservation.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Passenger {
    pub id_passager: i32,
    pub id_reservation: i32,
    pub nom: String,
    pub prenom: String,
    pub numero_passeport: String,
}

/// Passenger joined with the seat of its reservation.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReservationPassenger {
    pub id_passager: i32,
    pub id_reservation: i32,
    pub nom: String,
    pub prenom: String,
    pub numero_passeport: String,
    pub place_reservee: Option<i32>,
}

/// Manifest row for a flight: passenger, seat, and the booking account.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FlightPassenger {
    pub id_passager: i32,
    pub id_reservation: i32,
    pub nom: String,
    pub prenom: String,
    pub numero_passeport: String,
    pub place_reservee: Option<i32>,
    pub nom_utilisateur: String,
    pub prenom_utilisateur: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct NewPassenger {
    pub id_reservation: i32,
    pub nom: String,
    pub prenom: String,
    pub numero_passeport: String,
}

#[derive(Debug, Deserialize)]
pub struct PassengerUpdate {
    pub nom: String,
    pub prenom: String,
    pub numero_passeport: String,
}
