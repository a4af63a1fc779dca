//! Route guard for the authenticated section of the app.
//!
//! Three states, driven solely by the auth context: loading shows the
//! spinner and renders no children; a resolved-absent session redirects to
//! `/login` with history replacement so back-navigation does not return to
//! the guarded route; an authenticated session renders the nested routes.
//! There is no guard-level async work to cancel — the state is whatever the
//! session cache currently says.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::auth::use_auth_session;
use crate::components::loading::Loading;
use crate::state::session::SessionStatus;

/// Gate for protected routes; render beneath an `AuthProvider`.
#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let session = use_auth_session();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.status() == SessionStatus::Unauthenticated {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || match session.status() {
        SessionStatus::Loading => view! { <Loading/> }.into_any(),
        // The redirect effect is on its way; render nothing protected.
        SessionStatus::Unauthenticated => ().into_any(),
        SessionStatus::Authenticated(_) => view! { <Outlet/> }.into_any(),
    }
}
