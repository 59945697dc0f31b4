use icons::{Heart, LogOut, Upload, User};
use leptos::prelude::*;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::components::HeaderView;
use crate::models::{HeaderConfig, ProfileAction};
use crate::routes::{use_navigator, use_route_title, AppRoute};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let navigator = use_navigator();
    use_route_title(|| AppRoute::Profile);

    let buttons = ProfileAction::all()
        .into_iter()
        .map(|action| {
            let icon = match action {
                ProfileAction::UserInfo => view! { <User /> }.into_any(),
                ProfileAction::LikedGames => view! { <Heart /> }.into_any(),
                ProfileAction::UploadGame => view! { <Upload /> }.into_any(),
                ProfileAction::LogOut => view! { <LogOut /> }.into_any(),
            };
            let (variant, class) = if action == ProfileAction::LogOut {
                (ButtonVariant::Destructive, "logout-btn w-full justify-start")
            } else {
                (ButtonVariant::Outline, "profile-btn w-full justify-start")
            };
            let on_click = move |_| match action.target() {
                Some(route) => navigator.go(route),
                None => log::info!("{} is not available yet", action.label()),
            };

            view! {
                <Button variant=variant size=ButtonSize::Lg class=class on:click=on_click>
                    {icon}
                    {action.label()}
                </Button>
            }
        })
        .collect_view();

    view! {
        <div class="profile-container min-h-screen bg-background">
            <HeaderView config=HeaderConfig::member() />
            <main class="profile-buttons mx-auto flex w-full max-w-sm flex-col gap-3 px-4 py-10">
                {buttons}
            </main>
        </div>
    }
}
