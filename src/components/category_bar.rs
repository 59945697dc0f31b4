use leptos::prelude::*;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::models::Category;

/// One button per genre. Clicks are reported to `on_select`; the bar keeps no
/// selection of its own.
#[component]
pub fn CategoryFilterBar(on_select: Callback<Category>) -> impl IntoView {
    view! {
        <div class="category-bar flex flex-wrap gap-2" role="toolbar" aria-label="Game categories">
            {Category::all()
                .into_iter()
                .map(|category| {
                    view! {
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            class="category-btn"
                            on:click=move |_| on_select.run(category)
                        >
                            {category.to_string()}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}
