//! HTML document wrapper around rendered page bodies.

use leptos::prelude::*;

/// Product name shown in titles and the sidebar header.
pub const BRAND: &str = "OpenGov";

/// Render a view to an HTML fragment.
pub fn render<V: IntoView>(view: V) -> String {
    view.to_html()
}

/// Generate the full HTML document for a page.
pub fn html_shell(title: &str, body: &str) -> String {
    let title = view! { <title>{format!("{title} - {BRAND}")}</title> }.to_html();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="{BRAND} citizen portal">
    {title}

    <!-- Local scripts only (no CDN) -->
    <script defer src="/static/vendor/alpine.min.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen bg-white text-gray-900 antialiased">
{body}
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_wraps_body_and_title() {
        let html = html_shell("Projects & Initiatives", "<main>hi</main>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Projects &amp; Initiatives - OpenGov</title>"));
        assert!(html.contains("<main>hi</main>"));
    }
}
