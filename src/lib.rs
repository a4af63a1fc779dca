//! # budgetapp-client
//!
//! Leptos + WASM frontend shell for the BudgetApp budgeting product.
//! Routes, session-cookie authentication, a protected-route guard, and the
//! role-aware dashboard layout. Page content is rendered by nested routes;
//! the backend REST API lives at `/api/v1` on the same origin.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered shell into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
