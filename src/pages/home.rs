use leptos::prelude::*;

use crate::components::{CatalogGrid, CategoryFilterBar, HeaderView};
use crate::config::AppConfig;
use crate::models::{Category, HeaderConfig};
use crate::routes::{use_route_title, AppRoute};

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog_size = expect_context::<AppConfig>().catalog_size;
    use_route_title(|| AppRoute::Home);

    // Filtering is not implemented yet; the click is only acknowledged.
    let on_category = Callback::new(|category: Category| {
        log::info!("category clicked: {category}");
        if let Err(e) = window().alert_with_message(&format!("Category clicked: {category}")) {
            log::warn!("could not show category notice: {:?}", e);
        }
    });

    view! {
        <HeaderView config=HeaderConfig::home() />
        <main class="mx-auto w-full max-w-[1080px] space-y-6 px-4 py-6">
            <CategoryFilterBar on_select=on_category />
            <CatalogGrid count=catalog_size />
        </main>
    }
}
