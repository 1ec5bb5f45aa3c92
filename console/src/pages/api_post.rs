//! POST request demo page

use leptos::prelude::*;

use crate::api;

#[component]
pub fn PostExamplePage() -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (body_text, set_body_text) = signal(String::new());
    let (user_id, set_user_id) = signal(1u32);
    let (result, set_result) = signal::<Option<Result<api::PostResource, String>>>(None);
    let (loading, set_loading) = signal(false);
    let (elapsed_ms, set_elapsed_ms) = signal::<Option<f64>>(None);

    // submit action
    let submit = move |_| {
        let payload = api::PostPayload {
            title: title.get(),
            body: body_text.get(),
            user_id: user_id.get(),
        };

        set_loading.set(true);
        set_result.set(None);

        leptos::task::spawn_local(async move {
            let started = js_sys::Date::now();
            let res = api::create_post(&payload).await;
            if res.is_ok() {
                set_elapsed_ms.set(Some(js_sys::Date::now() - started));
            }
            set_result.set(Some(res));
            set_loading.set(false);
        });
    };

    view! {
        <div class="page api-example-page">
            <h1>"POST Request Example"</h1>
            <p>"Create a post on the JSONPlaceholder test API with a JSON body."</p>

            <div class="example-container">
                <div class="api-form">
                    <div class="form-group">
                        <label>"Title:"</label>
                        <input
                            type="text"
                            class="form-input"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Body:"</label>
                        <textarea
                            class="form-textarea"
                            rows="4"
                            prop:value=move || body_text.get()
                            on:input=move |ev| set_body_text.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"User ID:"</label>
                        <input
                            type="number"
                            class="form-input"
                            min="1"
                            prop:value=move || user_id.get().to_string()
                            on:input=move |ev| {
                                set_user_id.set(event_target_value(&ev).parse().unwrap_or(1))
                            }
                        />
                    </div>
                    <div class="action-section">
                        <button
                            class="api-button"
                            on:click=submit
                            disabled=move || loading.get() || title.get().is_empty()
                        >
                            {move || if loading.get() { "Submitting..." } else { "Submit post" }}
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
                                Ok(post) => {
                                    view! {
                                        <div class="result success">
                                            <div class="result-label">"Created"</div>
                                            <div class="result-value">
                                                <p>"ID: " {post.id}</p>
                                                <p>"Title: " {post.title}</p>
                                                <p>"Body: " {post.body}</p>
                                                <p>"User ID: " {post.user_id}</p>
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
