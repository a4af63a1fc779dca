//! Registration page: mirrors the login form, backed by the register
//! mutation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::{mutations, use_auth_session};
use crate::net::types::Credentials;

/// Registration form; a successful registration signs the user in and lands
/// on the dashboard.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_auth_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if pending.get() || email.get().trim().is_empty() || password.get().is_empty() {
            return;
        }
        error.set(None);
        pending.set(true);

        let credentials = Credentials {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match mutations::register(session, &credentials).await {
                Ok(_) => navigate("/dashboard", NavigateOptions::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
            pending.set(false);
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"BudgetApp"</h1>
                <h2>"Create account"</h2>

                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <label class="auth-label">
                    "Email"
                    <input
                        class="auth-input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-label">
                    "Password"
                    <input
                        class="auth-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <button
                    class="btn btn--primary"
                    disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if pending.get() { "Creating..." } else { "Register" }}
                </button>

                <p class="auth-switch">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
