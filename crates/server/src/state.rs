use common::env::StoreEnv;
use service::{leads::LeadService, packs::PackService, storage::SharedStore};

/// Everything handlers need, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Option<SharedStore>,
    pub store_env: StoreEnv,
    pub packs: PackService,
    pub leads: LeadService,
}

impl AppState {
    pub fn new(store: Option<SharedStore>, store_env: StoreEnv) -> Self {
        Self {
            packs: PackService::new(store.clone()),
            leads: LeadService::new(store.clone()),
            store,
            store_env,
        }
    }
}
