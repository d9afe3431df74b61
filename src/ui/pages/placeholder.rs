//! Stand-in content for sidebar destinations without a dedicated page.

use leptos::prelude::*;

use crate::navigation::Entry;
use crate::ui::components::{Card, CardContent, CardHeader, Icon};

#[component]
pub fn PlaceholderPage(entry: &'static Entry) -> impl IntoView {
    view! {
        <div class="max-w-2xl my-10" data-route=entry.route>
            <Card>
                <CardHeader>
                    <h1 class="flex items-center gap-2 text-2xl font-bold">
                        <Icon icon=entry.icon class="h-6 w-6" />
                        {entry.label}
                    </h1>
                </CardHeader>
                <CardContent>
                    <p class="text-gray-600">"This section is being prepared."</p>
                </CardContent>
            </Card>
        </div>
    }
}
