use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::ui::{Button, ButtonVariant};
use crate::components::HeaderView;
use crate::models::HeaderConfig;
use crate::routes::{use_navigator, use_route_title, AppRoute};

/// Fallback of the route table.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigator = use_navigator();
    let pathname = use_location().pathname;
    let path = move || pathname.get();

    use_route_title(move || AppRoute::NotFound { path: path() });

    view! {
        <HeaderView config=HeaderConfig::home() />
        <main class="not-found mx-auto flex w-full max-w-md flex-col items-start gap-3 px-4 py-12">
            <h1 class="text-xl font-semibold">"Page not found"</h1>
            <p class="text-sm text-muted-foreground">
                "Nothing lives at " <code>{path}</code> "."
            </p>
            <Button variant=ButtonVariant::Link class="px-0" on:click=move |_| navigator.go(AppRoute::Home)>
                "Go to the home page"
            </Button>
        </main>
    }
}
