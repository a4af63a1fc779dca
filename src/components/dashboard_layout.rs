//! Dashboard shell: role-aware sidebar, header with page title, and the
//! logout action. Page content renders into the nested `<Outlet/>`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::{mutations, use_auth_session};
use crate::state::nav::{nav_items, page_title};
use crate::state::ui::UiState;

/// Layout wrapping every protected page.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = use_auth_session();
    let location = use_location();
    let ui = RwSignal::new(UiState::default());

    let role = move || session.user().map(|u| u.role).unwrap_or_default();
    let email = move || session.user().map(|u| u.email).unwrap_or_default();

    // Avatar initial and display name derive from the email.
    let initial = move || {
        email()
            .chars()
            .next()
            .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().to_string())
    };
    let display_name = move || {
        let email = email();
        email.split('@').next().unwrap_or_default().to_owned()
    };

    let title = move || {
        let items = nav_items(role());
        page_title(&location.pathname.get(), &items)
    };

    let toggle_sidebar = move |_| ui.update(UiState::toggle_sidebar);
    let close_sidebar = move |_| ui.update(UiState::close_sidebar);

    let navigate = use_navigate();
    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match mutations::logout(session).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => leptos::logging::warn!("logout failed: {e}"),
            }
        });
    };

    view! {
        <div class="dashboard-container">
            <div
                class=move || {
                    if ui.get().sidebar_open { "sidebar-overlay open" } else { "sidebar-overlay" }
                }
                on:click=close_sidebar
                aria-hidden="true"
            ></div>

            <aside class=move || {
                if ui.get().sidebar_open { "dashboard-sidebar open" } else { "dashboard-sidebar" }
            }>
                <div class="sidebar-header">
                    <span>"BudgetApp"</span>
                </div>

                <nav class="sidebar-nav">
                    <For
                        each=move || nav_items(role())
                        key=|item| item.path
                        children=move |item| {
                            view! {
                                <A href=item.path attr:class="nav-item" on:click=close_sidebar>
                                    <span>{item.label}</span>
                                </A>
                            }
                        }
                    />
                </nav>

                <div class="sidebar-footer">
                    <div class="user-profile">
                        <div class="user-avatar">{initial}</div>
                        <div class="user-info">
                            <span class="user-name" title=email>{display_name}</span>
                            <span class="user-email">{move || role().label()}</span>
                        </div>
                    </div>
                    <button class="nav-item nav-item--logout" on:click=on_logout>
                        <span>"Logout"</span>
                    </button>
                </div>
            </aside>

            <main class="dashboard-main">
                <header class="dashboard-header">
                    <button
                        class="toggle-sidebar-btn"
                        on:click=toggle_sidebar
                        aria-label="Toggle Sidebar"
                    >
                        "\u{2630}"
                    </button>
                    <h1 class="header-title">{title}</h1>
                </header>

                <div class="dashboard-content">
                    <Outlet/>
                </div>
            </main>
        </div>
    }
}
