use leptos::prelude::*;

use crate::components::ui::{Alert, AlertDescription};
use crate::error::FieldError;

/// Inline list of validation problems; renders nothing while the list is empty.
#[component]
pub fn FieldErrors(#[prop(into)] errors: Signal<Vec<FieldError>>) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| !e.is_empty()) fallback=|| ().into_view()>
            <Alert class="border-destructive/30" attr:role="alert">
                <AlertDescription class="text-destructive">
                    <ul class="list-disc space-y-1 pl-4">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|error| view! { <li data-field=error.field()>{error.to_string()}</li> })
                                .collect_view()
                        }}
                    </ul>
                </AlertDescription>
            </Alert>
        </Show>
    }
}
