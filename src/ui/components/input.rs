//! Form inputs: text fields, textarea and checkbox.

use leptos::prelude::*;

/// Text input component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         input_type="email"
///         placeholder="Enter your email"
///         name="email"
///         id="email"
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Input type (text, email, password, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    let base_classes = "appearance-none bg-gray-200 rounded-2xl w-full p-3 text-gray-800 \
                        leading-tight focus:outline-none focus:shadow-outline";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <input
            type=input_type
            class=classes
            placeholder=placeholder
            name=name
            id=id
            autocomplete=autocomplete
        />
    }
}

/// Textarea component for multi-line input.
#[component]
pub fn Textarea(
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Number of rows.
    #[prop(default = 3)]
    rows: u32,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = "w-full px-3 py-2 border border-gray-300 rounded-md \
                        focus:outline-none focus:ring-2 focus:ring-blue-500";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <textarea
            class=classes
            placeholder=placeholder
            name=name
            id=id
            rows=rows
        />
    }
}

/// Checkbox with an inline label.
#[component]
pub fn Checkbox(
    /// Input name attribute.
    name: &'static str,
    /// Input ID attribute, also the label target.
    id: &'static str,
    /// Label text.
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-check flex items-center">
            <input
                type="checkbox"
                class="form-check-input h-4 w-4 border border-gray-50 rounded-sm cursor-pointer"
                name=name
                id=id
                value="true"
            />
            <label class="form-check-label ml-2 text-gray-800" for=id>
                {label}
            </label>
        </div>
    }
}
