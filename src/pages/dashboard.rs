//! Dashboard landing page, rendered inside the protected layout.

use leptos::prelude::*;

use crate::auth::use_auth_session;

/// Greets the signed-in user. Budget widgets render here as features land.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_auth_session();
    let email = move || session.user().map(|u| u.email).unwrap_or_default();

    view! {
        <section class="dashboard-page">
            <h2>{move || format!("Welcome back, {}", email())}</h2>
            <p>"Your budget overview will appear here."</p>
        </section>
    }
}
