pub mod allocation;
pub mod engine;
pub mod error;

pub use engine::{cancel_reservation, create_reservation};
pub use error::BookingError;
