//! `OpenGov` citizen portal.
//!
//! Server-rendered presentation layer of a government-facing portal:
//! authentication screens, a protected area with a collapsible navigation
//! sidebar, and a citizen feedback form.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server, one GET route per page
//! - **UI**: Leptos SSR components inside layout shells, Alpine.js on the client
//!
//! # Modules
//!
//! - [`navigation`]: Static sidebar registry
//! - [`preferences`]: Persisted client preferences (sidebar state)
//! - [`ui`]: Layout shells, pages and components
//! - [`forms`]: Field contracts of the rendered forms
//! - [`server`]: Router and server startup

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod forms;
pub mod navigation;
pub mod preferences;
pub mod server;
pub mod ui;

use std::sync::Arc;

use axum_extra::extract::CookieJar;

use crate::config::AppConfig;
use crate::preferences::CookiePreferences;
use crate::ui::layout::ProtectedShell;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Protected shell reading preferences from the request's cookies.
    pub fn protected_shell(&self, jar: CookieJar) -> ProtectedShell<CookiePreferences> {
        ProtectedShell::new(CookiePreferences::new(jar), &self.config.preferences)
    }
}
