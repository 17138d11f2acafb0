//! Shared layout wrapper with a header and a centered content column. The
//! header links keep the current `redirect` target so switching between the
//! two screens does not lose the destination.

use crate::app_lib::build_info;
use crate::features::auth::{state::use_auth, use_redirect_target};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500";

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let target = use_redirect_target();
    let location = use_location();
    let on_login = move || location.pathname.get() == "/login";
    let user_label = move || {
        auth.session.with(|session| {
            session
                .user
                .as_ref()
                .and_then(|user| user.name.clone().or_else(|| user.email.clone()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="font-semibold whitespace-nowrap dark:text-white">
                        "Storefront"
                    </A>
                    <Show
                        when=move || auth.is_authenticated.get()
                        fallback=move || {
                            view! {
                                <Show
                                    when=on_login
                                    fallback=move || {
                                        view! {
                                            <A href=move || target.get().login_href() {..} class=NAV_LINK>
                                                "Login"
                                            </A>
                                        }
                                    }
                                >
                                    <A href=move || target.get().register_href() {..} class=NAV_LINK>
                                        "Register"
                                    </A>
                                </Show>
                            }
                        }
                    >
                        <span class="text-sm text-gray-700 dark:text-gray-300">{user_label}</span>
                    </Show>
                </div>
            </header>
            <main class="flex-1 px-4 py-8">{children()}</main>
            <footer class="px-4 py-3 text-center text-xs text-gray-400">
                {format!("build {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
