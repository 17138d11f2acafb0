use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use storefront_auth::auth::{Navigator, RedirectGuard, RedirectTarget};

struct RouterNavigator<F>(F);

impl<F: Fn(&str, NavigateOptions)> Navigator for RouterNavigator<F> {
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

/// Destination from the `redirect` query parameter of the current URL.
pub fn use_redirect_target() -> Signal<RedirectTarget> {
    let location = use_location();
    Signal::derive(move || RedirectTarget::from_query(&location.search.get()))
}

/// Leaves the current screen once the session has a user. The guard is
/// re-evaluated on every session or target change and navigates at most once.
pub fn use_redirect_guard(target: Signal<RedirectTarget>) {
    let auth = use_auth();
    let navigator = RouterNavigator(use_navigate());
    let guard = StoredValue::new(RedirectGuard::new());

    Effect::new(move |_| {
        let session = auth.session.get();
        let target = target.get();
        guard.update_value(|guard| {
            guard.evaluate(&session, &target, &navigator);
        });
    });
}
