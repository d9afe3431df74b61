//! Navigation sidebar rendered from the registry.

use leptos::prelude::*;

use crate::navigation::{Entry, IconId, Section};
use crate::ui::components::Icon;
use crate::ui::document::BRAND;

/// Floating, icon-collapsible sidebar listing every registry section.
#[component]
pub fn AppSidebar(
    /// Sections in display order.
    sections: &'static [Section],
) -> impl IntoView {
    view! {
        <aside class="sidebar floating flex flex-col w-64 shrink-0 m-2 rounded-lg border border-gray-200 bg-gray-50 shadow" data-collapsible="icon">
            <SidebarHeader />
            <nav class="sidebar-content flex-1 overflow-y-auto">
                {sections
                    .iter()
                    .map(|section| view! { <SidebarGroup section=section /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Brand block at the top of the sidebar.
#[component]
fn SidebarHeader() -> impl IntoView {
    view! {
        <div class="sidebar-header p-2">
            <a href="/dashboard" class="flex items-center gap-2 p-2 rounded-md hover:bg-gray-100">
                <div class="bg-primary py-2 px-1 rounded-md">
                    <Icon icon=IconId::DoorOpen class="h-6 w-6 text-white" />
                </div>
                <span class="sidebar-label text-lg text-primary">
                    "Open"<span class="font-bold">"Gov"</span>
                </span>
                <span class="sr-only">{BRAND}</span>
            </a>
        </div>
    }
}

#[component]
fn SidebarGroup(section: &'static Section) -> impl IntoView {
    view! {
        <section class="sidebar-group p-2" data-section=section.label>
            <h2 class="sidebar-group-label px-2 text-xs font-medium text-gray-500">
                {section.label}
            </h2>
            <ul class="sidebar-menu flex flex-col gap-1">
                {section
                    .entries
                    .iter()
                    .map(|entry| view! { <SidebarMenuItem entry=entry /> })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn SidebarMenuItem(entry: &'static Entry) -> impl IntoView {
    view! {
        <li class="sidebar-menu-item">
            <a
                href=entry.route
                class="flex items-center gap-2 rounded-md p-2 text-sm hover:bg-gray-100"
            >
                <Icon icon=entry.icon />
                <span class="sidebar-label">{entry.label}</span>
            </a>
        </li>
    }
}
