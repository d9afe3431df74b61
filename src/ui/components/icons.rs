//! SVG icon components.
//!
//! Navigation data refers to icons symbolically through [`IconId`]; this
//! module is the only place those identifiers become markup. Shapes follow
//! the lucide 24x24 stroke set.

use leptos::prelude::*;

use crate::navigation::IconId;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Path data for each icon, drawn with a 2px round stroke.
fn icon_paths(icon: IconId) -> &'static [&'static str] {
    match icon {
        IconId::LayoutDashboard => &[
            "M4 3h5a1 1 0 0 1 1 1v7a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
            "M15 3h5a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1h-5a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
            "M15 12h5a1 1 0 0 1 1 1v7a1 1 0 0 1-1 1h-5a1 1 0 0 1-1-1v-7a1 1 0 0 1 1-1z",
            "M4 16h5a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1v-3a1 1 0 0 1 1-1z",
        ],
        IconId::Newspaper => &[
            "M4 22h16a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v16a2 2 0 0 1-2 2Zm0 0a2 2 0 0 1-2-2v-9c0-1.1.9-2 2-2h2",
            "M18 14h-8",
            "M15 18h-5",
            "M10 6h8v4h-8V6Z",
        ],
        IconId::BookOpen => &[
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
            "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        ],
        IconId::Presentation => &[
            "M2 3h20",
            "M21 3v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V3",
            "m7 21 5-5 5 5",
        ],
        IconId::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        IconId::MessageCircle => &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"],
        IconId::MessageCircleWarning => &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z", "M12 8v4", "M12 16h.01"],
        IconId::ChartPie => &[
            "M21 12c.552 0 1.005-.449.95-.998a10 10 0 0 0-8.953-8.951c-.55-.055-.998.398-.998.95v8a1 1 0 0 0 1 1z",
            "M21.21 15.89A10 10 0 1 1 8 2.83",
        ],
        IconId::CircleHelp => &[
            "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
            "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3",
            "M12 17h.01",
        ],
        IconId::Phone => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        IconId::DoorOpen => &[
            "M13 4h3a2 2 0 0 1 2 2v14",
            "M2 20h3",
            "M13 20h9",
            "M10 12v.01",
            "M13 4.562v16.157a1 1 0 0 1-1.242.97L5 20V5.562a2 2 0 0 1 1.515-1.94l4-1A2 2 0 0 1 13 4.561Z",
        ],
        IconId::PanelLeft => &[
            "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
            "M9 3v18",
        ],
    }
}

/// Inline SVG for a symbolic icon.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon icon=IconId::Newspaper class="text-primary" /> }
/// ```
#[component]
pub fn Icon(
    /// Which icon to draw.
    icon: IconId,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{} {}", ICON_SIZE, class);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            {icon_paths(icon)
                .iter()
                .map(|d| view! { <path d=*d /> })
                .collect_view()}
        </svg>
    }
}
