//! Citizen feedback ("Report an issue") page.

use leptos::prelude::*;

use crate::forms::FeedbackForm;
use crate::ui::components::{Button, ButtonVariant, Label, Textarea};

/// Feedback form with a single free-text issue field.
///
/// The form carries no `action`; the submission endpoint belongs to an
/// external collaborator accepting [`FeedbackForm`].
#[component]
pub fn ReportIssuePage() -> impl IntoView {
    view! {
        <div class="max-w-lg my-10 p-6 bg-white rounded-md">
            <h1 class="text-2xl font-bold">"Report an issue"</h1>
            <p class="text-gray-600 mb-6">
                "Submit your issues/thoughts on anything related to your government"
            </p>
            <form id="feedback-form">
                <div class="mb-6">
                    <Label html_for="feedback">"Issue"</Label>
                    <Textarea
                        id="feedback"
                        name=FeedbackForm::ISSUE
                        rows=4
                        placeholder="I own a computer."
                    />
                    <p class="text-gray-500 text-sm">
                        "Please mention the project or initiative you're giving a feedback/issue on"
                    </p>
                </div>
                <Button variant=ButtonVariant::Primary button_type="submit" class="py-2 px-4">
                    "Report Issue"
                </Button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_single_issue_field() {
        let html = view! { <ReportIssuePage /> }.to_html();
        assert_eq!(html.matches("<textarea").count(), 1);
        assert!(html.contains(r#"name="issue""#));
        assert!(html.contains(r#"for="feedback""#));
        assert_eq!(html.matches(r#"data-variant="primary""#).count(), 1);
        assert!(html.contains("Report Issue"));
        assert!(!html.contains("action="));
    }
}
