//! Toast host for notifications raised by the screens. Toasts follow the
//! configured display policy and dismiss themselves after the configured delay
//! or on click.

use crate::app_lib::config::use_config;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use storefront_auth::auth::{Notifier, Severity, ToastQueue};

#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    timeout_ms: u32,
}

impl Toasts {
    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|queue| queue.dismiss(id));
    }
}

impl Notifier for Toasts {
    fn notify(&self, message: &str, severity: Severity) {
        let Some(id) = self.queue.try_update(|queue| queue.push(message, severity)) else {
            return;
        };
        let toasts = *self;
        Timeout::new(self.timeout_ms, move || toasts.dismiss(id)).forget();
    }
}

fn toast_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => {
            "cursor-pointer rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 shadow dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
        }
        Severity::Success => {
            "cursor-pointer rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 shadow dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
        }
        Severity::Info => {
            "cursor-pointer rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 shadow dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
        }
    }
}

/// Provides the toast context and renders the visible toasts above the page.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let config = use_config();
    let toasts = Toasts {
        queue: RwSignal::new(ToastQueue::new(config.display_policy)),
        timeout_ms: u32::try_from(config.toast_timeout.as_millis()).unwrap_or(u32::MAX),
    };
    provide_context(toasts);

    let visible = move || {
        toasts
            .queue
            .with(|queue| queue.visible().cloned().collect::<Vec<_>>())
    };

    view! {
        {children()}
        <div class="fixed top-4 right-4 z-50 flex w-80 flex-col gap-2" aria-live="assertive">
            <For each=visible key=|toast| toast.id let:toast>
                <div
                    class=toast_class(toast.severity)
                    role="alert"
                    on:click=move |_| toasts.dismiss(toast.id)
                >
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(|| Toasts {
        queue: RwSignal::new(ToastQueue::default()),
        timeout_ms: 5_000,
    })
}
