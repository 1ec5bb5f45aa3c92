//! Pagination controls for the shared table view

use leptos::prelude::*;
use tableview::TableState;

#[component]
pub fn TablePagination(state: RwSignal<TableState>) -> impl IntoView {
    let page_count = move || state.with(|s| s.view().page.page_count);
    let current = move || state.with(|s| s.view().page.page);

    view! {
        // controls are hidden entirely when everything fits on one page
        <Show when=move || { page_count() > 1 }>
            <div class="pagination">
                <button
                    class="pagination-button"
                    disabled=move || current() == 1
                    on:click=move |_| {
                        state.update(|s| {
                            let page = s.query().page;
                            s.set_page(page.saturating_sub(1));
                        })
                    }
                >
                    "← Prev"
                </button>
                <div class="pagination-numbers">
                    {move || {
                        (1..=page_count())
                            .map(|n| {
                                view! {
                                    <button
                                        class=move || {
                                            if current() == n {
                                                "pagination-number active"
                                            } else {
                                                "pagination-number"
                                            }
                                        }
                                        on:click=move |_| state.update(|s| s.set_page(n))
                                    >
                                        {n}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <button
                    class="pagination-button"
                    disabled=move || current() == page_count()
                    on:click=move |_| {
                        state.update(|s| {
                            let page = s.query().page;
                            s.set_page(page + 1);
                        })
                    }
                >
                    "Next →"
                </button>
                <div class="page-info">
                    {move || format!("Page {} / {}", current(), page_count())}
                </div>
            </div>
        </Show>
    }
}
