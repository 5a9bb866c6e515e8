use volara_core::cabin::CabinLayout;

use crate::error::BookingError;

/// Resolve the seat a new reservation will occupy given the seats already
/// held on the flight. An explicitly requested seat must exist and be free;
/// with no request, one is drawn uniformly from the free set.
pub fn resolve_seat(
    cabin: &CabinLayout,
    requested: Option<i32>,
    taken: &[i32],
) -> Result<i32, BookingError> {
    match requested {
        Some(seat) => {
            if !cabin.contains(seat) {
                return Err(BookingError::SeatOutOfRange {
                    seat,
                    total: cabin.total_seats,
                });
            }
            if taken.contains(&seat) {
                return Err(BookingError::SeatAlreadyTaken(seat));
            }
            Ok(seat)
        }
        None => cabin.pick_free_seat(taken).ok_or(BookingError::FlightFull),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cabin() -> CabinLayout {
        CabinLayout {
            total_seats: 60,
            seats_per_row: 6,
        }
    }

    #[test]
    fn requested_free_seat_is_granted() {
        let seat = resolve_seat(&cabin(), Some(12), &[1, 2, 3]).unwrap();
        assert_eq!(seat, 12);
    }

    #[test]
    fn requested_taken_seat_is_rejected() {
        let err = resolve_seat(&cabin(), Some(2), &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, BookingError::SeatAlreadyTaken(2)));
    }

    #[test]
    fn out_of_range_seat_is_rejected() {
        let err = resolve_seat(&cabin(), Some(61), &[]).unwrap_err();
        assert!(matches!(
            err,
            BookingError::SeatOutOfRange { seat: 61, total: 60 }
        ));

        let err = resolve_seat(&cabin(), Some(0), &[]).unwrap_err();
        assert!(matches!(err, BookingError::SeatOutOfRange { seat: 0, .. }));
    }

    #[test]
    fn random_pick_comes_from_free_set() {
        let taken: Vec<i32> = (1..=59).collect();
        let seat = resolve_seat(&cabin(), None, &taken).unwrap();
        assert_eq!(seat, 60);
    }

    #[test]
    fn full_flight_rejects_random_pick() {
        let taken: Vec<i32> = (1..=60).collect();
        let err = resolve_seat(&cabin(), None, &taken).unwrap_err();
        assert!(matches!(err, BookingError::FlightFull));
    }
}
