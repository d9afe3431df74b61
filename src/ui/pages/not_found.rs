//! 404 page.

use leptos::prelude::*;

use crate::ui::components::{ButtonLink, ButtonVariant};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-20">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-gray-600 mb-6">"Page not found"</p>
            <ButtonLink href="/dashboard" variant=ButtonVariant::Primary>
                "Go to dashboard"
            </ButtonLink>
        </div>
    }
}
