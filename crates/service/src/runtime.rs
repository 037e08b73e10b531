//! Store construction at process start.

use std::sync::Arc;

use configs::{DatabaseConfig, StoreBackend};
use tracing::{error, info, warn};

use crate::storage::{JsonFileDocumentStore, SeaOrmDocumentStore, SharedStore};

/// Build the store selected by `cfg`. `Ok(None)` means no usable store is
/// configured, including a `DATABASE_URL` with an unsupported scheme.
pub async fn open_store(cfg: &DatabaseConfig) -> anyhow::Result<Option<SharedStore>> {
    let name = cfg.store_name();
    let backend = match cfg.backend() {
        Ok(backend) => backend,
        Err(e) => {
            error!(event = "store_unsupported", error = %e, "running without a document store");
            return Ok(None);
        }
    };
    match backend {
        StoreBackend::Disabled => {
            warn!(event = "store_disabled", "DATABASE_URL not set; running without a document store");
            Ok(None)
        }
        StoreBackend::Postgres(url) => {
            let db = models::db::connect_and_migrate(&url, cfg).await?;
            info!(event = "store_opened", backend = "postgres", store = %name, "document store ready");
            let store: SharedStore = Arc::new(SeaOrmDocumentStore::new(db, name));
            Ok(Some(store))
        }
        StoreBackend::JsonFile(dir) => {
            let store: SharedStore = JsonFileDocumentStore::open(&dir, &name).await?;
            info!(event = "store_opened", backend = "json_file", dir = %dir.display(), store = %name, "document store ready");
            Ok(Some(store))
        }
    }
}
