use std::{fmt, sync::Arc};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use atelier_core::{
    crypto::PasswordCrypto,
    database::{AppUnitOfWork, SqliteDatabase},
    services::{CatalogService, IdentityService, OwnershipLedger},
};

use crate::infra::config::Config;
use crate::session::cookie_key;

#[derive(Clone)]
pub struct AppState {
    pub identity: IdentityService,
    pub catalog: CatalogService,
    pub ledger: OwnershipLedger,
    pub config: Arc<Config>,
    pub cookie_key: Key,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

impl AppState {
    pub fn new(db: &SqliteDatabase, config: Config, crypto: PasswordCrypto) -> Self {
        let unit_of_work = AppUnitOfWork::sqlite(db);
        let cookie_key = cookie_key(config.auth.session_secret.as_deref());

        Self {
            identity: IdentityService::new(unit_of_work.users.clone(), Arc::new(crypto)),
            catalog: CatalogService::new(unit_of_work.artworks.clone()),
            ledger: OwnershipLedger::new(unit_of_work.clone()),
            config: Arc::new(config),
            cookie_key,
        }
    }
}
