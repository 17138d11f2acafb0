//! Landing page. The default redirect target of both screens.

use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.session.with(|session| {
            session
                .user
                .as_ref()
                .and_then(|user| user.name.clone().or_else(|| user.email.clone()))
                .map_or_else(|| "Welcome back.".to_string(), |name| format!("Welcome back, {name}."))
        })
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto text-center">
                <Show
                    when=move || !auth.is_loading.get()
                    fallback=|| view! { <p class="text-sm text-gray-500">"Loading session..."</p> }
                >
                    <Show
                        when=move || auth.is_authenticated.get()
                        fallback=|| {
                            view! {
                                <p class="text-gray-700 dark:text-gray-300">
                                    <A href="/login" {..} class="font-medium text-blue-600 hover:underline">
                                        "Login"
                                    </A>
                                    " or "
                                    <A href="/register" {..} class="font-medium text-blue-600 hover:underline">
                                        "create an account"
                                    </A>
                                    " to continue."
                                </p>
                            }
                        }
                    >
                        <p class="text-lg text-gray-900 dark:text-white">{greeting}</p>
                    </Show>
                </Show>
            </div>
        </AppShell>
    }
}
