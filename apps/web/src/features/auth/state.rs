//! Session state and context for the frontend. The provider reads the session
//! once on mount and exposes derived auth signals for the guard and routes.
//! Only non-sensitive session fields are kept in memory; cookies remain
//! `HttpOnly`.

use crate::app_lib::config::use_config;
use crate::features::auth::client;
use leptos::{prelude::*, task::spawn_local};
use storefront_auth::auth::Session;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Session>,
    pub is_authenticated: Signal<bool>,
    pub is_loading: RwSignal<bool>,
}

impl AuthContext {
    fn new(session: RwSignal<Session>) -> Self {
        let is_authenticated = Signal::derive(move || session.with(Session::is_authenticated));
        Self {
            session,
            is_authenticated,
            is_loading: RwSignal::new(true),
        }
    }

    /// Replaces the session; subscribers only re-run when it differs.
    pub fn publish(&self, session: Session) {
        if self.session.with_untracked(|current| *current != session) {
            self.session.set(session);
        }
    }
}

/// Provides auth context and reads the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(RwSignal::new(Session::anonymous()));
    provide_context(auth);

    let config = use_config();
    spawn_local(async move {
        if let Ok(session) = client::fetch_session(&config).await {
            auth.publish(session);
        }
        auth.is_loading.set(false);
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback anonymous context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(Session::anonymous())))
}
