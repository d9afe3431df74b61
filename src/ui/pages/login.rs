//! Sign-in page.

use leptos::prelude::*;

use crate::forms::LoginForm;
use crate::ui::components::{Button, ButtonSize, ButtonVariant, Checkbox, Input, Separator};

/// Sign-in form.
///
/// Purely presentational: the form has no `action` and "Sign in" is a
/// plain `type="button"` control. Authentication is wired up elsewhere.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-screen">
            <div class="bg-white rounded px-8 pt-6 pb-8 mb-4 w-full max-w-md">
                <div class="mb-4 text-center">
                    <img
                        src="/static/icons/opengov_logo.svg"
                        alt="OpenGov"
                        class="mb-10 w-32 mx-auto"
                        width="128"
                        height="32"
                    />
                    <h2 class="text-4xl font-bold font-gloock">"Welcome back"</h2>
                    <p class="text-gray-600 font-poppins">
                        "Enter your email and password to access your account"
                    </p>
                </div>

                <form id="login-form">
                    <div class="mb-4 mt-4">
                        <label for="email" class="block text-gray-700 font-bold mb-2">"Email"</label>
                        <Input
                            input_type="email"
                            id="email"
                            name=LoginForm::EMAIL
                            placeholder="Enter your email"
                            autocomplete="email"
                        />
                    </div>
                    <div class="mb-6">
                        <label for="password" class="block text-gray-700 font-bold mb-2">"Password"</label>
                        <Input
                            input_type="password"
                            id="password"
                            name=LoginForm::PASSWORD
                            placeholder="Enter your password"
                            autocomplete="current-password"
                        />
                    </div>
                    <div class="flex items-center justify-between">
                        <Checkbox id="remember-me" name=LoginForm::REMEMBER_ME label="Remember me" />
                        <a
                            href="#"
                            class="underline inline-block align-baseline font-bold text-sm text-gray-900 hover:text-gray-950"
                        >
                            "Forgot password"
                        </a>
                    </div>
                    <div class="mt-6">
                        <Button variant=ButtonVariant::Primary size=ButtonSize::Block>
                            "Sign in"
                        </Button>
                    </div>
                </form>

                <div class="flex-col items-center justify-center mt-4">
                    <Separator caption="or" class="mt-5" />
                    <div class="mt-5">
                        <Button variant=ButtonVariant::Secondary size=ButtonSize::Block>
                            <img src="/static/icons/google.svg" alt="Google Icon" class="w-5 h-5 mr-3" />
                            <span>"Continue with Google"</span>
                        </Button>
                    </div>
                    <div class="mt-5 text-center">
                        <a href="/register" class="text-gray-600">"Don't have an account?"</a>
                    </div>
                </div>
            </div>
        </div>
    }
}
