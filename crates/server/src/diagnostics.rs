//! Store connectivity report for `GET /test`.
//!
//! Never fails: store errors are folded into the `database` status string.

use common::env::StoreEnv;
use serde::{Deserialize, Serialize};
use service::storage::DocumentStore;
use utoipa::ToSchema;

pub const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DB_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
pub const DB_WORKING: &str = "✅ Connected & Working";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";
pub const SET: &str = "✅ Set";
pub const NOT_SET: &str = "❌ Not Set";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    /// Whether `DATABASE_URL` was set at startup
    pub database_url: String,
    /// Whether `DATABASE_NAME` was set at startup
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
    /// Logical store name, absent without a store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
}

fn flag(set: bool) -> String {
    let s = if set { SET } else { NOT_SET };
    s.to_string()
}

fn truncate(msg: &str) -> String {
    msg.chars().take(MAX_ERROR_CHARS).collect()
}

pub async fn diagnose(store: Option<&dyn DocumentStore>, env: StoreEnv) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: BACKEND_RUNNING.into(),
        database: DB_NOT_INITIALIZED.into(),
        database_url: flag(env.database_url_set),
        database_name: flag(env.database_name_set),
        connection_status: NOT_CONNECTED.into(),
        collections: Vec::new(),
        store_name: None,
    };

    if let Some(store) = store {
        report.connection_status = CONNECTED.into();
        report.store_name = Some(store.name().to_string());
        match store.list_collection_names(MAX_COLLECTIONS).await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                report.collections = names;
                report.database = DB_WORKING.into();
            }
            Err(e) => {
                report.database = format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let long = "é".repeat(80);
        assert_eq!(truncate(&long).chars().count(), MAX_ERROR_CHARS);
        assert_eq!(truncate("short"), "short");
    }

    #[tokio::test]
    async fn no_store_reports_not_connected() {
        let env = StoreEnv { database_url_set: false, database_name_set: true };
        let r = diagnose(None, env).await;
        assert_eq!(r.backend, BACKEND_RUNNING);
        assert_eq!(r.database, DB_NOT_INITIALIZED);
        assert_eq!(r.connection_status, NOT_CONNECTED);
        assert_eq!(r.database_url, NOT_SET);
        assert_eq!(r.database_name, SET);
        assert!(r.collections.is_empty());
        assert!(r.store_name.is_none());
    }
}
