//! Environment helpers
//!
//! Presence checks for the variables the diagnostics endpoint reports on.

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_NAME: &str = "DATABASE_NAME";

/// Which store-related variables were present when the process started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreEnv {
    pub database_url_set: bool,
    pub database_name_set: bool,
}

impl StoreEnv {
    /// Snapshot the current process environment.
    pub fn capture() -> Self {
        Self {
            database_url_set: is_set(DATABASE_URL),
            database_name_set: is_set(DATABASE_NAME),
        }
    }
}

/// A variable counts as set only when it holds a non-empty value.
pub fn is_set(key: &str) -> bool {
    std::env::var(key).map(|v| !v.trim().is_empty()).unwrap_or(false)
}
