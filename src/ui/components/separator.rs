//! Separator with an optional centred caption.

use leptos::prelude::*;

/// Horizontal rule, optionally split by a short caption such as "or".
#[component]
pub fn Separator(
    /// Caption rendered between the two rules.
    #[prop(default = "")]
    caption: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("flex items-center gap-3 {}", class);

    if caption.is_empty() {
        return view! { <div role="separator" class="h-[1px] w-full shrink-0 bg-gray-200" /> }
            .into_any();
    }

    view! {
        <div role="separator" class=classes>
            <span class="h-[1px] flex-1 bg-gray-200" />
            <span class="text-gray-600">{caption}</span>
            <span class="h-[1px] flex-1 bg-gray-200" />
        </div>
    }
    .into_any()
}
