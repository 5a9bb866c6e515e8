use sqlx::PgPool;
use tracing::info;
use volara_core::cabin::CabinLayout;
use volara_core::reservation::{NewReservation, ReservationDetail};
use volara_store::{flight_repo, reservation_repo, StoreError};

use crate::allocation::resolve_seat;
use crate::error::BookingError;

/// Create a reservation. The conflict check, seat resolution, row insert,
/// guarded capacity decrement, and joined read-back run as one transaction:
/// either every step is visible to other readers afterwards or none is.
/// Dropping the transaction on any early return rolls everything back.
pub async fn create_reservation(
    pool: &PgPool,
    cabin: &CabinLayout,
    req: &NewReservation,
) -> Result<ReservationDetail, BookingError> {
    // Out-of-range seats are rejected before touching the store.
    if let Some(seat) = req.place_reservee {
        if !cabin.contains(seat) {
            return Err(BookingError::SeatOutOfRange {
                seat,
                total: cabin.total_seats,
            });
        }
    }

    let mut tx = pool.begin().await?;

    if flight_repo::get(&mut *tx, req.id_vol).await?.is_none() {
        return Err(BookingError::NotFound);
    }

    let taken = reservation_repo::reserved_seats(&mut *tx, req.id_vol).await?;
    let seat = resolve_seat(cabin, req.place_reservee, &taken)?;

    let reservation_id =
        match reservation_repo::insert(&mut *tx, req.id_users, req.id_vol, seat).await {
            Ok(id) => id,
            // A concurrent transaction claimed the seat between our check
            // and the insert; the partial unique index caught it.
            Err(e) if e.is_unique_violation() => {
                return Err(seat_conflict(req.place_reservee, seat))
            }
            // The id_users reference does not exist.
            Err(e) if e.is_foreign_key_violation() => return Err(BookingError::NotFound),
            Err(e) => return Err(e.into()),
        };

    // Final correctness backstop: if the counter already hit zero (a race
    // against the availability check above), the whole operation fails and
    // the insert rolls back with it.
    if flight_repo::decrement_if_positive(&mut *tx, req.id_vol)
        .await?
        .is_none()
    {
        return Err(BookingError::FlightFull);
    }

    let Some(detail) = reservation_repo::detail(&mut *tx, reservation_id).await? else {
        return Err(StoreError::from(sqlx::Error::RowNotFound).into());
    };

    tx.commit().await?;

    info!(
        reservation = reservation_id,
        vol = req.id_vol,
        seat,
        "reservation created"
    );
    Ok(detail)
}

/// Error for an insert that lost a seat race. An explicitly requested seat
/// reports the conflict so the caller can pick another; a randomly picked
/// seat means the last free seats were claimed under us, which the caller
/// can only experience as a full flight.
fn seat_conflict(requested: Option<i32>, seat: i32) -> BookingError {
    match requested {
        Some(_) => BookingError::SeatAlreadyTaken(seat),
        None => BookingError::FlightFull,
    }
}

/// Cancel a reservation and give one seat of capacity back to its flight,
/// atomically. Dependent passenger and payment rows go with it through the
/// store's foreign-key cascade.
pub async fn cancel_reservation(pool: &PgPool, reservation_id: i32) -> Result<(), BookingError> {
    let mut tx = pool.begin().await?;

    let Some(id_vol) = reservation_repo::flight_of(&mut *tx, reservation_id).await? else {
        return Err(BookingError::NotFound);
    };

    // A cancellation that raced us deleted the row first; reporting NotFound
    // here keeps the counter from being incremented twice.
    if reservation_repo::delete(&mut *tx, reservation_id).await? == 0 {
        return Err(BookingError::NotFound);
    }

    flight_repo::increment_seats(&mut *tx, id_vol).await?;

    tx.commit().await?;

    info!(reservation = reservation_id, vol = id_vol, "reservation cancelled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_race_on_requested_seat_reports_the_conflict() {
        assert!(matches!(
            seat_conflict(Some(14), 14),
            BookingError::SeatAlreadyTaken(14)
        ));
    }

    #[test]
    fn lost_race_on_random_seat_reads_as_full_flight() {
        // Two bookers omitting the seat can both draw the last free one;
        // the loser saw no seat conflict of their own making, only a flight
        // that filled up.
        assert!(matches!(seat_conflict(None, 60), BookingError::FlightFull));
    }
}
