use crate::app_lib::config::use_config;
use crate::components::{AppShell, FormField, SubmitButton, use_toasts};
use crate::features::auth::client::BrowserIdentityProvider;
use crate::features::auth::state::use_auth;
use crate::features::auth::{use_redirect_guard, use_redirect_target};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use storefront_auth::auth::submit_login;
use storefront_auth::forms::{Credentials, Field, FormController, login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_config();
    let auth = use_auth();
    let toasts = use_toasts();
    let target = use_redirect_target();
    use_redirect_guard(target);

    let form = RwSignal::new(login::form());

    let login_action = Action::new_local(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        let config = config.clone();
        async move {
            let identity = BrowserIdentityProvider::new(config.clone(), auth);
            let outcome =
                submit_login(&identity, &toasts, &config.sign_in_method, &credentials).await;
            form.update(FormController::finish_submit);
            outcome
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        // Invalid or already submitting: the controller now shows every error.
        if let Some(Ok(values)) = form.try_update(FormController::begin_submit) {
            login_action.dispatch(Credentials::from_values(&values));
        }
    };

    let submitting = Signal::derive(move || form.with(FormController::is_submitting));

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit novalidate>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">"Login"</h1>
                <FormField form=form field=Field::Email input_type="email" autocomplete="email" />
                <FormField
                    form=form
                    field=Field::Password
                    input_type="password"
                    autocomplete="current-password"
                />
                <SubmitButton pending=submitting>"Login"</SubmitButton>
                <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                    "No account yet? "
                    <A
                        href=move || target.get().register_href()
                        {..}
                        class="font-medium text-blue-600 hover:underline dark:text-blue-500"
                    >
                        "Register"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
