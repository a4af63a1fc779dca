//! Landing route: forwards to the dashboard or the login screen depending
//! on the session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::use_auth_session;
use crate::components::loading::Loading;
use crate::state::session::SessionStatus;

/// `/` — redirects once the session resolves; shows the spinner meanwhile.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_auth_session();
    let navigate = use_navigate();

    Effect::new(move || {
        let replace = NavigateOptions {
            replace: true,
            ..Default::default()
        };
        match session.status() {
            SessionStatus::Loading => {}
            SessionStatus::Authenticated(_) => navigate("/dashboard", replace),
            SessionStatus::Unauthenticated => navigate("/login", replace),
        }
    });

    view! { <Loading/> }
}
