//! ==============================================================================
//! lib.rs - admin console demo
//! ==============================================================================
//!
//! purpose:
//!     leptos csr single-page app: client-side routing, a collapsible
//!     sidebar menu, static placeholder pages, two data-table demos driven
//!     by the tableview pipeline, and four pages exercising GET/POST/PUT/
//!     DELETE against the JSONPlaceholder test api.
//!
//! architecture:
//!     - leptos csr (client-side rendering), compiled to wasm
//!     - leptos_router for navigation, active links via use_location
//!     - all table state lives in tableview::TableState; each page owns
//!       a fresh instance and its own row snapshot
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod pages;

use components::Layout;
use pages::{
    AccountSettingsPage, AdvancedTablePage, DashboardPage, DeleteExamplePage, GetExamplePage,
    HomePage, PostExamplePage, PreferencesPage, ProfileEditPage, ProfilePage, PutExamplePage,
    SecuritySettingsPage, SettingsPage, TablePage,
};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Admin Console Demo" />
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/settings") view=SettingsPage />
                    <Route path=path!("/settings/security") view=SecuritySettingsPage />
                    <Route path=path!("/settings/account") view=AccountSettingsPage />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route path=path!("/profile/edit") view=ProfileEditPage />
                    <Route path=path!("/profile/preferences") view=PreferencesPage />
                    <Route path=path!("/api/get") view=GetExamplePage />
                    <Route path=path!("/api/post") view=PostExamplePage />
                    <Route path=path!("/api/put") view=PutExamplePage />
                    <Route path=path!("/api/delete") view=DeleteExamplePage />
                    <Route path=path!("/table") view=TablePage />
                    <Route path=path!("/advanced-table") view=AdvancedTablePage />
                </Routes>
            </Layout>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"404 - Page Not Found"</h1>
            <p><a href="/">"Back to home"</a></p>
        </div>
    }
}
