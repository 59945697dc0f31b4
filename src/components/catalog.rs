use icons::Play;
use leptos::prelude::*;

use crate::components::ui::{Button, ButtonSize};
use crate::config::AppConfig;
use crate::models::CatalogEntry;
use crate::routes::use_navigator;

/// Home grid of `count` placeholder games.
#[component]
pub fn CatalogGrid(count: u32) -> impl IntoView {
    let image_ref = expect_context::<AppConfig>().placeholder_ref();

    view! {
        <div class="game-grid grid grid-cols-2 gap-4 sm:grid-cols-3">
            {CatalogEntry::placeholders(count, &image_ref)
                .into_iter()
                .map(|entry| view! { <CatalogCard entry=entry /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn CatalogCard(entry: CatalogEntry) -> impl IntoView {
    let navigator = use_navigator();
    let target = entry.play_route();
    let play_label = format!("Play game {}", entry.id);

    view! {
        <div class="game-card group relative aspect-[4/3] overflow-hidden rounded-xl border bg-muted">
            <img src=entry.image_ref alt=entry.alt_text class="h-full w-full object-cover" />
            <div class="game-hover-info pointer-events-none absolute inset-x-0 bottom-0 bg-black/60 px-3 py-2 text-white opacity-0 transition-opacity group-hover:opacity-100 group-focus-within:opacity-100">
                <p class="text-sm font-semibold">{entry.title}</p>
                <p class="text-xs">{entry.blurb}</p>
            </div>
            <Button
                size=ButtonSize::Icon
                class="play-icon absolute right-3 top-3 rounded-full"
                attr:title="Play Game"
                attr:aria-label=play_label
                on:click=move |_| navigator.go(target.clone())
            >
                <Play />
            </Button>
        </div>
    }
}
