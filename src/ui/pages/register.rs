//! Registration screen.

use leptos::prelude::*;

/// Registration is not open yet; points visitors back to sign-in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-screen">
            <div class="w-full max-w-md px-8 text-center">
                <h2 class="text-4xl font-bold font-gloock">"Create an account"</h2>
                <p class="text-gray-600 font-poppins mt-4">
                    "Account registration is not available yet."
                </p>
                <a href="/login" class="inline-block mt-6 underline font-bold text-sm text-gray-900">
                    "Back to sign in"
                </a>
            </div>
        </div>
    }
}
