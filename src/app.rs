//! Root application component with routing and the auth context provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::auth::AuthProvider;
use crate::components::dashboard_layout::DashboardLayout;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The auth provider sits above the router so every route — the guard
/// included — reads the same session context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/budgetapp.css"/>
        <Title text="BudgetApp"/>

        <AuthProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                    <ParentRoute path=StaticSegment("dashboard") view=ProtectedRoute>
                        <ParentRoute path=StaticSegment("") view=DashboardLayout>
                            <Route path=StaticSegment("") view=DashboardPage/>
                        </ParentRoute>
                    </ParentRoute>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
