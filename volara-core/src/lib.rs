pub mod cabin;
pub mod flight;
pub mod identity;
pub mod passenger;
pub mod payment;
pub mod reservation;
