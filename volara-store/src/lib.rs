pub mod app_config;
pub mod database;
pub mod error;
pub mod flight_repo;
pub mod passenger_repo;
pub mod payment_repo;
pub mod reservation_repo;
pub mod user_repo;

pub use database::DbClient;
pub use error::StoreError;
