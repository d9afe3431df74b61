//! Button component with variants and sizes.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Subtle ghost button.
    Ghost,
    /// Outline button.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-slate-900 text-white hover:bg-slate-950",
            Self::Secondary => "bg-white text-gray-800 border border-gray-300 hover:bg-gray-100",
            Self::Ghost => "bg-transparent text-gray-800 hover:bg-gray-100",
            Self::Outline => "bg-transparent border border-gray-300 text-gray-800 hover:bg-gray-50",
        }
    }

    /// Value of the `data-variant` marker attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Outline => "outline",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Full-width form button.
    Block,
    /// Icon-only button.
    Icon,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-xs",
            Self::Md => "h-10 px-4 text-sm",
            Self::Block => "w-full p-3 rounded-2xl",
            Self::Icon => "h-8 w-8",
        }
    }
}

/// ShadCN-style button component.
///
/// Renders no behaviour of its own; `button_type` decides whether the
/// browser treats it as a form submit.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Primary size=ButtonSize::Block>
///         "Sign in"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=button_classes(variant, size, class)
            data-variant=variant.as_str()
        >
            {children()}
        </button>
    }
}

/// Navigation link styled as a [`Button`].
///
/// Use this instead of wrapping a `Button` in an `<a>`.
#[component]
pub fn ButtonLink(
    href: &'static str,
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=button_classes(variant, size, class) data-variant=variant.as_str()>
            {children()}
        </a>
    }
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    let base_classes = "inline-flex items-center justify-center gap-2 rounded-md font-medium \
                        transition-colors focus-visible:outline-none focus-visible:ring-2 \
                        focus-visible:ring-slate-900 focus-visible:ring-offset-2 \
                        disabled:pointer-events-none disabled:opacity-50";

    format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        class
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_carries_button_styling() {
        let html = view! {
            <ButtonLink href="/dashboard" variant=ButtonVariant::Secondary>"Home"</ButtonLink>
        }
        .to_html();

        assert!(html.contains("<a "));
        assert!(html.contains(r#"href="/dashboard""#));
        assert!(html.contains(r#"data-variant="secondary""#));
        assert!(html.contains(ButtonVariant::Secondary.classes()));
        assert!(!html.contains("<button"));
    }
}
