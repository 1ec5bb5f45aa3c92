//! DELETE request demo page

use leptos::prelude::*;

use crate::api;

#[component]
pub fn DeleteExamplePage() -> impl IntoView {
    let (post_id, set_post_id) = signal(1u32);
    let (result, set_result) = signal::<Option<Result<(), String>>>(None);
    let (loading, set_loading) = signal(false);
    let (elapsed_ms, set_elapsed_ms) = signal::<Option<f64>>(None);

    // delete action
    let submit = move |_| {
        let id = post_id.get();

        set_loading.set(true);
        set_result.set(None);

        leptos::task::spawn_local(async move {
            let started = js_sys::Date::now();
            let res = api::delete_post(id).await;
            if res.is_ok() {
                set_elapsed_ms.set(Some(js_sys::Date::now() - started));
            }
            set_result.set(Some(res));
            set_loading.set(false);
        });
    };

    view! {
        <div class="page api-example-page">
            <h1>"DELETE Request Example"</h1>
            <p>"Delete a post by id on the JSONPlaceholder test API."</p>

            <div class="example-container">
                <div class="api-form">
                    <div class="form-group">
                        <label>"Post ID:"</label>
                        <input
                            type="number"
                            class="form-input"
                            min="1"
                            prop:value=move || post_id.get().to_string()
                            on:input=move |ev| {
                                set_post_id.set(event_target_value(&ev).parse().unwrap_or(1))
                            }
                        />
                    </div>
                    <div class="action-section">
                        <button
                            class="api-button danger"
                            on:click=submit
                            disabled=move || loading.get()
                        >
                            {move || if loading.get() { "Deleting..." } else { "Delete post" }}
                        </button>
                    </div>
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
                    result
                        .get()
                        .map(|r| {
                            match r {
                                Ok(()) => {
                                    view! {
                                        <div class="result success">
                                            <div class="result-label">"Deleted"</div>
                                            <div class="result-value">
                                                "Post " {post_id.get()} " was deleted."
                                            </div>
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(e) => {
                                    view! {
                                        <div class="result error">
                                            <div class="result-label">"Error"</div>
                                            <div class="result-value">{e}</div>
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                        })
                }}
            </div>
        </div>
    }
}
