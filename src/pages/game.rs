use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::components::ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
};
use crate::components::HeaderView;
use crate::models::HeaderConfig;
use crate::routes::{use_navigator, use_route_title, AppRoute};

#[derive(Params, PartialEq, Clone, Debug)]
pub struct GameRouteParams {
    pub id: Option<String>,
}

/// Detail page for `/game/:id`. The id is shown as received.
#[component]
pub fn GameDetailPage() -> impl IntoView {
    let navigator = use_navigator();
    let params = use_params::<GameRouteParams>();

    // Read params inside closures so the page follows `/game/1` -> `/game/2`.
    let id = move || params.get().ok().and_then(|p| p.id).unwrap_or_default();

    use_route_title(move || AppRoute::Game { id: id() });

    view! {
        <HeaderView config=HeaderConfig::member() />
        <main class="mx-auto w-full max-w-[720px] px-4 py-8">
            <Card>
                <CardHeader>
                    <CardTitle class="game-title text-xl">{move || format!("Game {}", id())}</CardTitle>
                    <CardDescription>"Game Page (Coming Soon)"</CardDescription>
                </CardHeader>
                <CardContent>
                    <Button variant=ButtonVariant::Outline on:click=move |_| navigator.go(AppRoute::Home)>
                        "Back to games"
                    </Button>
                </CardContent>
            </Card>
        </main>
    }
}
