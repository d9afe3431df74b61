//! Form field label.

use leptos::prelude::*;

#[component]
pub fn Label(
    /// ID of the labelled control.
    html_for: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!("block font-medium mb-1 {}", class);

    view! {
        <label for=html_for class=classes>
            {children()}
        </label>
    }
}
