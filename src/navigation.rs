//! Sidebar navigation registry.
//!
//! The registry is compiled-in literal data: an ordered list of [`Section`]s,
//! each holding an ordered list of [`Entry`]s. Order is display order. Icons
//! are symbolic ([`IconId`]) and resolved to markup by the UI layer.

/// Symbolic icon identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    LayoutDashboard,
    Newspaper,
    BookOpen,
    Presentation,
    Users,
    MessageCircle,
    MessageCircleWarning,
    ChartPie,
    CircleHelp,
    Phone,
    DoorOpen,
    PanelLeft,
}

/// One navigable item in a sidebar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Display label.
    pub label: &'static str,
    /// Target route, opaque to the registry.
    pub route: &'static str,
    /// Symbolic icon reference.
    pub icon: IconId,
}

/// A labelled group of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Group label shown above the entries.
    pub label: &'static str,
    /// Entries in display order.
    pub entries: &'static [Entry],
}

impl Section {
    /// Entries whose route is a mountable path (skips `#` anchors).
    pub fn routable(&self) -> impl Iterator<Item = &'static Entry> {
        self.entries.iter().filter(|entry| is_path(entry.route))
    }
}

/// Same-page anchor used for entries without a destination yet.
pub const PLACEHOLDER_ROUTE: &str = "#";

/// Routes served by the auth shell.
pub const AUTH_ROUTES: &[&str] = &["/login", "/register"];

const APPLICATION: &[Entry] = &[
    Entry {
        label: "Dashboard",
        route: "/dashboard",
        icon: IconId::LayoutDashboard,
    },
    Entry {
        label: "News",
        route: "/news",
        icon: IconId::Newspaper,
    },
    Entry {
        label: "Policy Areas",
        route: "/policy-areas",
        icon: IconId::BookOpen,
    },
    Entry {
        label: "Projects & Initiatives",
        route: PLACEHOLDER_ROUTE,
        icon: IconId::Presentation,
    },
    Entry {
        label: "Meetings & Events",
        route: "/meetings-events",
        icon: IconId::Users,
    },
    Entry {
        label: "Public Feedback",
        route: "/public-feedback",
        icon: IconId::MessageCircle,
    },
];

const CONSULTATION: &[Entry] = &[
    Entry {
        label: "Report an Issue",
        route: "/report-issue",
        icon: IconId::MessageCircleWarning,
    },
    Entry {
        label: "Open Data Portal",
        route: "/open-data-portal",
        icon: IconId::ChartPie,
    },
    Entry {
        label: "FAQ/Help",
        route: "/faq-help",
        icon: IconId::CircleHelp,
    },
    Entry {
        label: "Contact Us",
        route: "/contact-us",
        icon: IconId::Phone,
    },
];

static SECTIONS: &[Section] = &[
    Section {
        label: "Application",
        entries: APPLICATION,
    },
    Section {
        label: "Consultation",
        entries: CONSULTATION,
    },
];

/// All sidebar sections in display order.
pub fn sections() -> &'static [Section] {
    SECTIONS
}

/// Every mountable registry route, in display order.
pub fn routes() -> impl Iterator<Item = &'static str> {
    SECTIONS
        .iter()
        .flat_map(Section::routable)
        .map(|entry| entry.route)
}

/// First entry (in display order) targeting `route`.
pub fn find_entry(route: &str) -> Option<&'static Entry> {
    SECTIONS
        .iter()
        .flat_map(|section| section.entries.iter())
        .find(|entry| entry.route == route)
}

/// Whether `route` is accepted by the router: the `#` anchor or an absolute
/// path of lowercase kebab-case segments.
pub fn is_route(route: &str) -> bool {
    route == PLACEHOLDER_ROUTE || is_path(route)
}

fn is_path(route: &str) -> bool {
    let Some(rest) = route.strip_prefix('/') else {
        return false;
    };

    !rest.is_empty()
        && rest.split('/').all(|segment| {
            !segment.is_empty()
                && !segment.starts_with('-')
                && !segment.ends_with('-')
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        })
}
