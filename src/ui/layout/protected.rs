//! Sidebar + main-content frame for signed-in screens.

use leptos::prelude::*;

use crate::navigation::{IconId, Section};
use crate::preferences::SidebarState;
use crate::ui::components::{Button, ButtonSize, ButtonVariant, Icon};

use super::sidebar::AppSidebar;

/// Seven days, matching the client-side sidebar cookie lifetime.
const COOKIE_MAX_AGE_SECS: u32 = 60 * 60 * 24 * 7;

/// Protected layout: navigation sidebar beside an inset main area.
///
/// `sidebar` only sets the initial state. The trigger flips it client-side
/// and persists the new value under `cookie_name`.
#[component]
pub fn ProtectedLayout(
    /// Initial sidebar state.
    sidebar: SidebarState,
    /// Registry sections shown in the sidebar.
    sections: &'static [Section],
    /// Preference key the toggle writes back to.
    cookie_name: String,
    /// Page content.
    children: Children,
) -> impl IntoView {
    let alpine_state = format!("{{ open: {} }}", sidebar.is_open());

    view! {
        <div
            class="sidebar-wrapper group/sidebar flex min-h-screen w-full"
            data-state=sidebar.as_data_state()
            x-data=alpine_state
            x-bind:data-state="open ? 'expanded' : 'collapsed'"
        >
            <AppSidebar sections=sections />
            <div class="sidebar-inset relative flex flex-1 flex-col bg-white">
                <main class="p-4">
                    <SidebarTrigger cookie_name=cookie_name />
                    {children()}
                </main>
            </div>
        </div>
    }
}

/// Toggle control flipping the sidebar between expanded and collapsed.
#[component]
pub fn SidebarTrigger(cookie_name: String) -> impl IntoView {
    let on_click = format!(
        "open = !open; document.cookie = '{cookie_name}=' + open + '; path=/; max-age={COOKIE_MAX_AGE_SECS}'"
    );

    view! {
        <div class="sidebar-trigger" data-sidebar="trigger" x-on:click=on_click>
            <Button variant=ButtonVariant::Ghost size=ButtonSize::Icon>
                <Icon icon=IconId::PanelLeft />
                <span class="sr-only">"Toggle Sidebar"</span>
            </Button>
        </div>
    }
}
