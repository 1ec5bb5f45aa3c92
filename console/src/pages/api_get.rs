//! GET request demo page

use leptos::prelude::*;

use crate::api;

#[component]
pub fn GetExamplePage() -> impl IntoView {
    let (users, set_users) = signal::<Vec<api::ApiUser>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (elapsed_ms, set_elapsed_ms) = signal::<Option<f64>>(None);

    // fetch action
    let fetch_users = move |_| {
        set_loading.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            let started = js_sys::Date::now();
            match api::fetch_users().await {
                Ok(data) => {
                    set_users.set(data);
                    set_elapsed_ms.set(Some(js_sys::Date::now() - started));
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_users.set(Vec::new());
                }
            }
            // loading always clears, success or failure
            set_loading.set(false);
        });
    };

    view! {
        <div class="page api-example-page">
            <h1>"GET Request Example"</h1>
            <p>"Fetch the user list from the JSONPlaceholder test API."</p>

            <div class="example-container">
                <div class="action-section">
                    <button class="api-button" on:click=fetch_users disabled=move || loading.get()>
                        {move || if loading.get() { "Loading..." } else { "Fetch users" }}
                    </button>
                </div>

                {move || {
                    elapsed_ms
                        .get()
                        .map(|ms| {
                            view! {
                                <div class="response-time">
                                    <p>"Response time: " {format!("{:.0} ms", ms)}</p>
                                </div>
                            }
                        })
                }}

                {move || {
                    error
                        .get()
                        .map(|e| {
                            view! {
                                <div class="error-message">
                                    <p>"Error: " {e}</p>
                                </div>
                            }
                        })
                }}

                <Show when=move || !users.get().is_empty()>
                    <div class="data-display">
                        <h3>"Users"</h3>
                        <div class="users-list">
                            {move || {
                                users
                                    .get()
                                    .into_iter()
                                    .map(|user| {
                                        view! {
                                            <div class="user-item">
                                                <h4>{user.name}</h4>
                                                <p>"Email: " {user.email}</p>
                                                <p>"Phone: " {user.phone}</p>
                                                <p>"Website: " {user.website}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
