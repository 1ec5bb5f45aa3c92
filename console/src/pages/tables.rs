//! Table demo pages: two thin configurations of the shared DataTable

use leptos::prelude::*;

use crate::components::DataTable;

#[component]
pub fn TablePage() -> impl IntoView {
    view! {
        <div class="page table-example-page">
            <h1>"Table Example"</h1>
            <p>"A data table with search, per-column filters, sorting and pagination."</p>
            <div class="example-container">
                <h2>"Features"</h2>
                <ul>
                    <li>"Click a column header to sort, click again to reverse"</li>
                    <li>"Search across name, email, role and status"</li>
                    <li>"Narrow single columns with the filter row"</li>
                    <li>"Navigate pages with the pagination controls"</li>
                </ul>
                <DataTable />
            </div>
        </div>
    }
}

#[component]
pub fn AdvancedTablePage() -> impl IntoView {
    view! {
        <div class="page advanced-table-example-page">
            <h1>"Advanced Table Example"</h1>
            <p>"The same table pipeline with filters integrated into the column headers."</p>
            <div class="example-container">
                <h2>"Features"</h2>
                <ul>
                    <li>"Click a column header to sort"</li>
                    <li>"Open per-column filters with the gear button in the header"</li>
                    <li>"Search across all text columns"</li>
                    <li>"Paginate through the filtered result"</li>
                </ul>
                <DataTable header_filters=true />
            </div>
        </div>
    }
}
