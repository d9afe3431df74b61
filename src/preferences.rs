//! Persisted client preferences.
//!
//! The protected shell derives its initial sidebar state from one key in a
//! client-side key-value store (a cookie in production). The store is an
//! injected capability so shells can be rendered against a fake in tests.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use axum_extra::extract::CookieJar;
use thiserror::Error;
use tracing::{debug, warn};

/// Default key holding the sidebar open/closed preference.
pub const SIDEBAR_COOKIE: &str = "sidebar:state";

/// Errors a preference store may report.
///
/// Callers never surface these; every failure falls back to the default.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference {key} is malformed")]
    Malformed { key: String },
}

/// Read-only key-value lookup of persisted client preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
}

/// Preferences carried by the cookies of the current request.
#[derive(Debug, Clone, Default)]
pub struct CookiePreferences {
    jar: CookieJar,
}

impl CookiePreferences {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }
}

#[async_trait]
impl PreferenceStore for CookiePreferences {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.jar.get(key).map(|cookie| cookie.value().to_string()))
    }
}

/// In-memory preference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferences {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }
}

/// Initial open/closed state of the navigation sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarState {
    Open,
    #[default]
    Closed,
}

impl SidebarState {
    /// Only the exact literal `"true"` opens the sidebar.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Open,
            _ => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Value of the shell's `data-state` attribute.
    pub fn as_data_state(self) -> &'static str {
        match self {
            Self::Open => "expanded",
            Self::Closed => "collapsed",
        }
    }
}

/// Resolve the sidebar state from `store`, waiting at most `timeout`.
///
/// Missing keys, store errors and timeouts all resolve to
/// [`SidebarState::Closed`].
pub async fn resolve_sidebar<S>(store: &S, key: &str, timeout: Duration) -> SidebarState
where
    S: PreferenceStore + ?Sized,
{
    match tokio::time::timeout(timeout, store.get(key)).await {
        Ok(Ok(value)) => {
            let state = SidebarState::from_value(value.as_deref());
            debug!(key, state = state.as_data_state(), "Sidebar preference resolved");
            state
        }
        Ok(Err(error)) => {
            warn!(name: "preferences.read_failed", key, %error, "Falling back to closed sidebar");
            SidebarState::Closed
        }
        Err(_) => {
            warn!(
                name: "preferences.read_timeout",
                key,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                "Falling back to closed sidebar"
            );
            SidebarState::Closed
        }
    }
}
