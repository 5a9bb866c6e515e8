use std::sync::Arc;
use volara_core::cabin::CabinLayout;
use volara_store::DbClient;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
    pub admin_expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbClient>,
    pub auth: AuthConfig,
    pub cabin: CabinLayout,
}
