//! Static placeholder pages: heading plus a one-line description

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Welcome"</h1>
            <p>"This is the home page of the demo console."</p>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Dashboard"</h1>
            <p>"System overview lives here."</p>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Settings"</h1>
            <p>"General system settings."</p>
        </div>
    }
}

#[component]
pub fn SecuritySettingsPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Security Settings"</h1>
            <p>"Password, sessions and two-factor options."</p>
        </div>
    }
}

#[component]
pub fn AccountSettingsPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Account Settings"</h1>
            <p>"Account-level options."</p>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Profile"</h1>
            <p>"Your profile information."</p>
        </div>
    }
}

#[component]
pub fn ProfileEditPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Edit Profile"</h1>
            <p>"Update your profile details."</p>
        </div>
    }
}

#[component]
pub fn PreferencesPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Preferences"</h1>
            <p>"Personal preferences."</p>
        </div>
    }
}
