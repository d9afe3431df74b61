//! Layout shells wrapping page content.
//!
//! - [`AuthShell`]: split-pane frame for the unauthenticated screens
//! - [`ProtectedShell`]: sidebar frame whose initial state comes from the
//!   injected [`PreferenceStore`]

mod auth;
mod protected;
mod sidebar;

pub use auth::{AUTH_IMAGE, AuthLayout};
pub use protected::{ProtectedLayout, SidebarTrigger};
pub use sidebar::AppSidebar;

use leptos::prelude::*;

use crate::config::PreferenceSettings;
use crate::navigation::{self, Section};
use crate::preferences::{PreferenceStore, SidebarState, resolve_sidebar};
use crate::ui::document::{html_shell, render};

/// Renders pages inside [`AuthLayout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthShell;

impl AuthShell {
    pub fn render<V>(self, title: &str, content: V) -> String
    where
        V: IntoView + 'static,
    {
        let body = render(view! { <AuthLayout>{content}</AuthLayout> });
        html_shell(title, &body)
    }
}

/// Renders pages inside [`ProtectedLayout`].
#[derive(Debug)]
pub struct ProtectedShell<S> {
    store: S,
    settings: PreferenceSettings,
    sections: &'static [Section],
}

impl<S: PreferenceStore> ProtectedShell<S> {
    pub fn new(store: S, settings: &PreferenceSettings) -> Self {
        Self {
            store,
            settings: settings.clone(),
            sections: navigation::sections(),
        }
    }

    /// Swap the sidebar sections, e.g. for a trimmed-down test registry.
    #[must_use]
    pub fn with_sections(mut self, sections: &'static [Section]) -> Self {
        self.sections = sections;
        self
    }

    /// Sidebar state for the first paint.
    pub async fn initial_sidebar(&self) -> SidebarState {
        resolve_sidebar(
            &self.store,
            &self.settings.sidebar_cookie,
            self.settings.read_timeout(),
        )
        .await
    }

    pub async fn render<F, V>(&self, title: &str, content: F) -> String
    where
        F: FnOnce() -> V,
        V: IntoView + 'static,
    {
        let sidebar = self.initial_sidebar().await;
        self.render_with(sidebar, title, content())
    }

    /// Render with an already-resolved sidebar state.
    pub fn render_with<V>(&self, sidebar: SidebarState, title: &str, content: V) -> String
    where
        V: IntoView + 'static,
    {
        let body = render(view! {
            <ProtectedLayout
                sidebar=sidebar
                sections=self.sections
                cookie_name=self.settings.sidebar_cookie.clone()
            >
                {content}
            </ProtectedLayout>
        });
        html_shell(title, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::navigation::{Entry, IconId};
    use crate::preferences::{MemoryPreferences, SIDEBAR_COOKIE};

    fn settings() -> PreferenceSettings {
        AppConfig::default().preferences
    }

    fn shell(store: MemoryPreferences) -> ProtectedShell<MemoryPreferences> {
        ProtectedShell::new(store, &settings())
    }

    #[test]
    fn auth_shell_splits_artwork_and_content() {
        let html = AuthShell.render("Login", view! { <p id="inner">"form"</p> });

        let artwork = html.find(r#"data-pane="artwork""#).unwrap();
        let content = html.find(r#"data-pane="content""#).unwrap();
        let inner = html.find(r#"id="inner""#).unwrap();
        assert!(artwork < content && content < inner);
        assert!(html.contains(AUTH_IMAGE));
    }

    #[tokio::test]
    async fn absent_preference_renders_collapsed() {
        let html = shell(MemoryPreferences::new())
            .render("Dashboard", || view! { <p>"body"</p> })
            .await;
        assert!(html.contains(r#"data-state="collapsed""#));
        assert!(html.contains("{ open: false }"));
    }

    #[tokio::test]
    async fn true_preference_renders_expanded() {
        let store = MemoryPreferences::new().with(SIDEBAR_COOKIE, "true");
        let html = shell(store)
            .render("Dashboard", || view! { <p>"body"</p> })
            .await;
        assert!(html.contains(r#"data-state="expanded""#));
        assert!(html.contains("{ open: true }"));
    }

    #[tokio::test]
    async fn other_values_render_collapsed() {
        for value in ["false", "True", "1", ""] {
            let store = MemoryPreferences::new().with(SIDEBAR_COOKIE, value);
            let state = shell(store).initial_sidebar().await;
            assert_eq!(state, SidebarState::Closed, "{value:?}");
        }
    }

    #[test]
    fn sidebar_groups_follow_registry_order() {
        let html = shell(MemoryPreferences::new()).render_with(
            SidebarState::Closed,
            "Dashboard",
            view! { <p>"body"</p> },
        );

        assert_eq!(html.matches("sidebar-group-label").count(), 2);
        assert_eq!(html.matches("sidebar-menu-item").count(), 10);

        let application = html.find(r#"data-section="Application""#).unwrap();
        let consultation = html.find(r#"data-section="Consultation""#).unwrap();
        assert!(application < consultation);
        assert_eq!(html[application..consultation].matches("sidebar-menu-item").count(), 6);
        assert_eq!(html[consultation..].matches("sidebar-menu-item").count(), 4);

        let mut last = 0;
        for entry in navigation::sections().iter().flat_map(|s| s.entries) {
            let href = format!(r#"href="{}""#, entry.route);
            let at = html[last..].find(&href).map(|i| i + last);
            let at = at.unwrap_or_else(|| panic!("{} missing after {last}", entry.label));
            last = at;
        }
    }

    #[test]
    fn content_follows_the_trigger() {
        let html = shell(MemoryPreferences::new()).render_with(
            SidebarState::Open,
            "Dashboard",
            view! { <p id="page">"body"</p> },
        );
        let trigger = html.find(r#"data-sidebar="trigger""#).unwrap();
        let page = html.find(r#"id="page""#).unwrap();
        assert!(trigger < page);
        assert!(html.contains("sidebar:state="));
    }

    #[test]
    fn custom_sections_render_their_sizes() {
        static ONE: &[Entry] = &[Entry {
            label: "Only",
            route: "/only",
            icon: IconId::Phone,
        }];
        static SECTIONS: &[Section] = &[Section {
            label: "Solo",
            entries: ONE,
        }];

        let html = shell(MemoryPreferences::new())
            .with_sections(SECTIONS)
            .render_with(SidebarState::Closed, "Solo", view! { <p>"x"</p> });
        assert_eq!(html.matches("sidebar-menu-item").count(), 1);
        assert!(html.contains(r#"href="/only""#));
    }

    #[test]
    fn render_is_deterministic() {
        let shell = shell(MemoryPreferences::new());
        let first = shell.render_with(SidebarState::Open, "Dashboard", view! { <p>"x"</p> });
        let second = shell.render_with(SidebarState::Open, "Dashboard", view! { <p>"x"</p> });
        assert_eq!(first, second);
    }
}
