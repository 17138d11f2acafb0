use crate::app_lib::config::use_config;
use crate::components::{AppShell, FormField, SubmitButton, use_toasts};
use crate::features::auth::client::{BrowserAccountService, BrowserIdentityProvider};
use crate::features::auth::state::use_auth;
use crate::features::auth::{use_redirect_guard, use_redirect_target};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use storefront_auth::auth::submit_registration;
use storefront_auth::forms::{Field, FormController, RegistrationData, register};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = use_config();
    let auth = use_auth();
    let toasts = use_toasts();
    let target = use_redirect_target();
    use_redirect_guard(target);

    let form = RwSignal::new(register::form());

    let register_action = Action::new_local(move |data: &RegistrationData| {
        let data = data.clone();
        let config = config.clone();
        async move {
            let accounts = BrowserAccountService::new(config.clone());
            let identity = BrowserIdentityProvider::new(config.clone(), auth);
            let outcome = submit_registration(
                &accounts,
                &identity,
                &toasts,
                &config.sign_in_method,
                &data,
            )
            .await;
            form.update(FormController::finish_submit);
            outcome
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(Ok(values)) = form.try_update(FormController::begin_submit) {
            register_action.dispatch(RegistrationData::from_values(&values));
        }
    };

    let submitting = Signal::derive(move || form.with(FormController::is_submitting));

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit novalidate>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Register"
                </h1>
                <FormField form=form field=Field::Name autocomplete="username" />
                <FormField form=form field=Field::Email input_type="email" autocomplete="email" />
                <FormField
                    form=form
                    field=Field::Password
                    input_type="password"
                    autocomplete="new-password"
                />
                <FormField
                    form=form
                    field=Field::ConfirmPassword
                    input_type="password"
                    autocomplete="new-password"
                />
                <SubmitButton pending=submitting>"Register"</SubmitButton>
                <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                    "Already have an account? "
                    <A
                        href=move || target.get().login_href()
                        {..}
                        class="font-medium text-blue-600 hover:underline dark:text-blue-500"
                    >
                        "Login"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
