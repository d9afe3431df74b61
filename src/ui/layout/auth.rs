//! Split-pane frame for the sign-in and registration screens.

use leptos::prelude::*;

/// Decorative artwork shown beside auth forms.
pub const AUTH_IMAGE: &str = "/static/images/login_wall.svg";

/// Two-pane auth layout: artwork on the left, page content on the right.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="auth-layout w-full h-screen flex">
            <div class="w-1/2 h-screen bg-cover bg-center" data-pane="artwork">
                <img class="p-4 w-full" src=AUTH_IMAGE alt="authImage" />
            </div>
            <div class="w-1/2 h-screen" data-pane="content">
                {children()}
            </div>
        </div>
    }
}
