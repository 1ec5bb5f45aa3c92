//! Application shell: sidebar plus main content region

use leptos::prelude::*;

use super::MenuBar;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);

    view! {
        <div class="layout">
            <MenuBar collapsed=collapsed set_collapsed=set_collapsed />
            <main class=move || {
                if collapsed.get() { "main-content collapsed" } else { "main-content" }
            }>
                {children()}
            </main>
        </div>
    }
}
