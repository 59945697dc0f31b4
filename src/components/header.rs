use icons::User;
use leptos::prelude::*;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::config::AppConfig;
use crate::models::{HeaderConfig, HeaderControl};
use crate::routes::use_navigator;

/// Page header. Renders whatever `config.controls()` lists; it keeps no state
/// of its own.
#[component]
pub fn HeaderView(config: HeaderConfig) -> impl IntoView {
    let navigator = use_navigator();
    let logo_ref = expect_context::<AppConfig>().logo_ref();

    let controls = config
        .controls()
        .into_iter()
        .map(|control| {
            let on_click = move |_| navigator.go(control.target());
            match control {
                HeaderControl::Logo => view! {
                    <img
                        src=logo_ref.clone()
                        alt="Logo"
                        class="logo mr-auto h-10 w-auto cursor-pointer rounded-md"
                        on:click=on_click
                    />
                }
                .into_any(),
                HeaderControl::SignUp => view! {
                    <Button class="signup-btn" on:click=on_click>
                        "Sign Up →"
                    </Button>
                }
                .into_any(),
                HeaderControl::Profile => view! {
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class="profile-icon rounded-full"
                        attr:aria-label="Profile"
                        on:click=on_click
                    >
                        <User class="size-6" />
                    </Button>
                }
                .into_any(),
            }
        })
        .collect_view();

    view! {
        <header class=format!(
            "{} flex w-full items-center gap-3 border-b px-4 py-3",
            config.variant.css_class(),
        )>{controls}</header>
    }
}
