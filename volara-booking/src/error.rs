use volara_store::StoreError;

/// Failure taxonomy of the reservation lifecycle. The first four kinds are
/// business rejections the caller can act on; `Store` is anything the
/// database refused.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("reservation or flight not found")]
    NotFound,
    #[error("seat {0} is already reserved on this flight")]
    SeatAlreadyTaken(i32),
    #[error("seat {seat} is outside the cabin layout (1..={total})")]
    SeatOutOfRange { seat: i32, total: u32 },
    #[error("no seats left on this flight")]
    FlightFull,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<sqlx::Error> for BookingError {
    fn from(e: sqlx::Error) -> Self {
        Self::Store(StoreError::from(e))
    }
}
