use leptos::prelude::*;

use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter,
    CardHeader, CardTitle, Input, Label,
};
use crate::components::{FieldErrors, HeaderView};
use crate::config::GOOGLE_ICON_URL;
use crate::drafts::{AuthDraft, AuthMode};
use crate::error::FieldError;
use crate::models::HeaderConfig;
use crate::routes::{use_navigator, use_route_title};

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! { <AuthFormView mode=AuthMode::SignUp /> }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    view! { <AuthFormView mode=AuthMode::SignIn /> }
}

/// Credential form shared by sign-up and sign-in.
///
/// The draft lives as long as the page is mounted. Submitting checks the
/// fields and logs the request body; there is no auth service to send it to
/// yet.
#[component]
pub fn AuthFormView(mode: AuthMode) -> impl IntoView {
    let navigator = use_navigator();
    use_route_title(move || mode.route());

    let draft: RwSignal<AuthDraft> = RwSignal::new(AuthDraft::new(mode));
    let errors: RwSignal<Vec<FieldError>> = RwSignal::new(Vec::new());
    let notice: RwSignal<Option<String>> = RwSignal::new(None);

    let username_id = use_random_id_for("username");
    let email_id = use_random_id_for("email");
    let password_id = use_random_id_for("password");

    let password_autocomplete = if mode.has_username() {
        "new-password"
    } else {
        "current-password"
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current = draft.get_untracked();
        let issues = current.validate();
        if issues.is_empty() {
            log::info!("{} submitted: {:?}", mode.submit_label(), current.credentials());
            notice.set(Some(
                "Thanks! Accounts are not open yet, nothing was sent.".to_string(),
            ));
        } else {
            log::warn!("{} blocked by {} field error(s)", mode.submit_label(), issues.len());
            notice.set(None);
        }
        errors.set(issues);
    };

    let on_social = move |_| {
        log::info!("{} clicked; third-party sign-in is not connected", mode.social_label());
    };

    let username_field = mode.has_username().then(|| {
        view! {
            <div class="flex flex-col gap-2">
                <Label html_for=username_id.clone()>"Username"</Label>
                <Input
                    id=username_id
                    placeholder="username"
                    autocomplete="username"
                    required=true
                    value=Signal::derive(move || {
                        draft.with(|d| d.username.clone().unwrap_or_default())
                    })
                    on_input=Callback::new(move |v| draft.update(|d| d.set_username(v)))
                />
            </div>
        }
    });

    view! {
        <div class="signup-container min-h-screen bg-background">
            <HeaderView config=HeaderConfig::auth() />

            <div class="mx-auto flex w-full max-w-md flex-col px-4 py-12">
                <Card class="signup-form">
                    <CardHeader>
                        <CardTitle class="text-xl">{mode.submit_label()}</CardTitle>
                    </CardHeader>

                    <CardContent class="flex flex-col gap-4">
                        <Button
                            variant=ButtonVariant::Outline
                            class="google-signup-btn w-full"
                            on:click=on_social
                        >
                            <img src=GOOGLE_ICON_URL alt="Google logo" class="google-icon size-5" />
                            {mode.social_label()}
                        </Button>

                        <form class="flex flex-col gap-4" on:submit=on_submit>
                            {username_field}

                            <div class="flex flex-col gap-2">
                                <Label html_for=email_id.clone()>"Email"</Label>
                                <Input
                                    id=email_id
                                    r#type="email"
                                    placeholder="e-mail"
                                    autocomplete="email"
                                    required=true
                                    value=Signal::derive(move || draft.with(|d| d.email.clone()))
                                    on_input=Callback::new(move |v| draft.update(|d| d.set_email(v)))
                                />
                            </div>

                            <div class="flex flex-col gap-2">
                                <Label html_for=password_id.clone()>"Password"</Label>
                                <Input
                                    id=password_id
                                    r#type="password"
                                    placeholder="password"
                                    autocomplete=password_autocomplete
                                    required=true
                                    value=Signal::derive(move || draft.with(|d| d.password.clone()))
                                    on_input=Callback::new(move |v| draft.update(|d| d.set_password(v)))
                                />
                            </div>

                            <FieldErrors errors=errors />

                            <Show when=move || notice.get().is_some() fallback=|| ().into_view()>
                                {move || {
                                    notice.get().map(|text| view! {
                                        <Alert>
                                            <AlertDescription>{text}</AlertDescription>
                                        </Alert>
                                    })
                                }}
                            </Show>

                            <Button class="submit-btn w-full">{mode.submit_label()}</Button>
                        </form>
                    </CardContent>

                    <CardFooter class="login-link text-xs text-muted-foreground">
                        {mode.alternate_prompt()}
                        <Button
                            variant=ButtonVariant::Link
                            size=ButtonSize::Sm
                            class="link-text px-0"
                            on:click=move |_| navigator.go(mode.alternate().route())
                        >
                            {mode.alternate_label()}
                        </Button>
                    </CardFooter>
                </Card>
            </div>
        </div>
    }
}
