use crate::config::AppConfig;
use crate::pages::{
    GameDetailPage, HomePage, NotFoundPage, ProfilePage, SignInPage, SignUpPage, UploadPage,
};
use crate::routes::{AppRoute, Navigator};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    // - pages remount on every route change, which drops any form draft.
    view! {
        <Router>
            <NavigationHost>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("signup") view=SignUpPage />
                    <Route path=path!("signin") view=SignInPage />
                    <Route path=path!("login") view=SignInPage />
                    <Route path=path!("profile") view=ProfilePage />
                    <Route path=path!("upload") view=UploadPage />
                    <Route path=path!("game/:id") view=GameDetailPage />
                </Routes>
            </NavigationHost>
        </Router>
    }
}

/// Turns navigation requests from leaf views into router navigations.
#[component]
fn NavigationHost(children: Children) -> impl IntoView {
    let navigate = use_navigate();

    provide_context(Navigator::new(move |route: AppRoute| {
        let path = route.path();
        log::debug!("navigate -> {path}");
        navigate(&path, Default::default());
    }));

    children()
}
