use models::{validation::check, Pack, Record};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::catalog::default_packs;
use crate::errors::ServiceError;
use crate::storage::{create_record, expose_id, require, SharedStore};

/// A pack as returned by the listing endpoint. Stored packs carry their
/// store id; built-in packs have none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackListing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub pack: Pack,
}

/// Where a listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackSource {
    Store,
    /// No store configured
    FallbackNoStore,
    /// Store reachable but the pack collection is empty
    FallbackEmpty,
    /// Store failed while listing
    FallbackError,
    /// Packs are stored but none of them parse
    FallbackUnreadable,
}

#[derive(Debug, Clone)]
pub struct PackCatalog {
    pub source: PackSource,
    pub packs: Vec<PackListing>,
}

impl PackCatalog {
    fn fallback(source: PackSource) -> Self {
        let packs = default_packs().into_iter().map(|pack| PackListing { id: None, pack }).collect();
        Self { source, packs }
    }
}

/// Pack creation and listing over an optional store.
#[derive(Clone)]
pub struct PackService {
    store: Option<SharedStore>,
}

impl PackService {
    pub fn new(store: Option<SharedStore>) -> Self { Self { store } }

    /// Validate and insert; returns the generated id.
    #[instrument(skip_all, fields(name = %pack.name))]
    pub async fn create(&self, pack: &Pack) -> Result<String, ServiceError> {
        check(pack)?;
        let store = require(&self.store)?;
        let id = create_record(store.as_ref(), pack).await?;
        info!(%id, collection = %Pack::COLLECTION, "pack created");
        Ok(id)
    }

    /// Stored packs, or the built-in catalog when there are none to show.
    pub async fn list(&self) -> PackCatalog {
        let Some(store) = self.store.as_ref() else {
            return PackCatalog::fallback(PackSource::FallbackNoStore);
        };
        let docs = match store.get_documents(Pack::COLLECTION.as_str()).await {
            Ok(docs) => docs,
            Err(e) => {
                warn!(error = %e, "listing packs failed; serving built-in catalog");
                return PackCatalog::fallback(PackSource::FallbackError);
            }
        };
        if docs.is_empty() {
            return PackCatalog::fallback(PackSource::FallbackEmpty);
        }

        let packs: Vec<PackListing> = docs
            .into_iter()
            .map(expose_id)
            .filter_map(|doc| {
                let id = doc.get("id").cloned();
                match serde_json::from_value::<PackListing>(serde_json::Value::Object(doc)) {
                    Ok(p) => Some(p),
                    Err(e) => {
                        warn!(?id, error = %e, "skipping stored pack that no longer parses");
                        None
                    }
                }
            })
            .collect();
        if packs.is_empty() {
            warn!("no stored pack parses; serving built-in catalog");
            return PackCatalog::fallback(PackSource::FallbackUnreadable);
        }
        PackCatalog { source: PackSource::Store, packs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_store;
    use std::collections::HashSet;

    fn pack(name: &str) -> Pack {
        Pack {
            platform: "TikTok".into(),
            name: name.into(),
            price_da: Some("25,000 DA".into()),
            duration: None,
            results: vec!["+50k vues".into()],
            advantages: vec![],
            objective: None,
            logo: None,
        }
    }

    #[tokio::test]
    async fn no_store_lists_fallback_and_refuses_create() {
        let svc = PackService::new(None);
        let listed = svc.list().await;
        assert_eq!(listed.source, PackSource::FallbackNoStore);
        assert_eq!(listed.packs.len(), 6);
        assert!(listed.packs.iter().all(|p| p.id.is_none()));

        let err = svc.create(&pack("Pack Viral")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unavailable(_)));
    }

    #[tokio::test]
    async fn empty_store_lists_fallback_then_stored_packs() {
        let (store, path) = temp_store().await;
        let svc = PackService::new(Some(store));
        assert_eq!(svc.list().await.source, PackSource::FallbackEmpty);

        let id = svc.create(&pack("Pack Flash")).await.unwrap();
        assert!(!id.is_empty());

        let listed = svc.list().await;
        assert_eq!(listed.source, PackSource::Store);
        assert_eq!(listed.packs.len(), 1);
        assert_eq!(listed.packs[0].id.as_deref(), Some(id.as_str()));
        assert_eq!(listed.packs[0].pack, pack("Pack Flash"));
        let _ = tokio::fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn unreadable_packs_are_skipped_then_fall_back() {
        let (store, path) = temp_store().await;
        let svc = PackService::new(Some(store.clone()));
        let broken = serde_json::json!({"platform": 5, "name": ["Pack"]});
        let serde_json::Value::Object(doc) = broken else { unreachable!() };
        store.create_document("pack", doc).await.unwrap();

        let listed = svc.list().await;
        assert_eq!(listed.source, PackSource::FallbackUnreadable);
        assert_eq!(listed.packs.len(), 6);
        assert!(listed.packs.iter().all(|p| p.id.is_none()));

        svc.create(&pack("Pack Flash")).await.unwrap();
        let listed = svc.list().await;
        assert_eq!(listed.source, PackSource::Store);
        assert_eq!(listed.packs.len(), 1);
        assert_eq!(listed.packs[0].pack.name, "Pack Flash");
        let _ = tokio::fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn invalid_pack_is_not_inserted() {
        let (store, path) = temp_store().await;
        let svc = PackService::new(Some(store.clone()));
        let err = svc.create(&pack(" ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(store.get_documents("pack").await.unwrap().is_empty());
        let _ = tokio::fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let (store, path) = temp_store().await;
        let svc = PackService::new(Some(store));
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let svc = svc.clone();
                tokio::spawn(async move { svc.create(&pack(&format!("Pack {i}"))).await })
            })
            .collect();
        let mut ids = HashSet::new();
        for h in handles {
            ids.insert(h.await.unwrap().unwrap());
        }
        assert_eq!(ids.len(), 16);
        assert_eq!(svc.list().await.packs.len(), 16);
        let _ = tokio::fs::remove_file(path).await;
    }
}
