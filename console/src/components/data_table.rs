//! ==============================================================================
//! data_table.rs - the shared table view
//! ==============================================================================
//!
//! one parametrized component drives both table pages; they differ only in
//! where the column filter inputs live. the basic variant shows a filter
//! row above the table, the advanced variant puts toggleable filter
//! dropdowns inside the column headers. all query logic is tableview's.
//! ==============================================================================

use leptos::prelude::*;
use tableview::{sample_rows, Column, SortDirection, SortKey, TableState};

use super::TablePagination;

/// displayed columns: sort key, filterable column (if any), header label
const COLUMNS: [(SortKey, Option<Column>, &str); 6] = [
    (SortKey::Id, None, "ID"),
    (SortKey::Name, Some(Column::Name), "Name"),
    (SortKey::Email, Some(Column::Email), "Email"),
    (SortKey::Role, Some(Column::Role), "Role"),
    (SortKey::Status, Some(Column::Status), "Status"),
    (SortKey::CreatedAt, None, "Created"),
];

// ==============================================================================
// table component
// ==============================================================================

#[component]
pub fn DataTable(#[prop(optional)] header_filters: bool) -> impl IntoView {
    // each table page owns a fresh 100-row snapshot and its query state
    let state = RwSignal::new(TableState::new(sample_rows(100)));
    // advanced variant: which header dropdowns are open
    let open_filters: RwSignal<Vec<Column>> = RwSignal::new(Vec::new());

    let clear = move |_| {
        state.update(|s| s.clear_all());
        open_filters.set(Vec::new());
    };

    let table_class = if header_filters {
        "advanced-data-table"
    } else {
        "data-table"
    };

    view! {
        <div class="table-controls">
            <div class="search-section">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search users..."
                    prop:value=move || state.with(|s| s.query().free_text.clone())
                    on:input=move |ev| {
                        state.update(|s| s.set_free_text(&event_target_value(&ev)))
                    }
                />
                <button class="clear-button" on:click=clear>
                    "Clear all filters"
                </button>
            </div>
            <Show when=move || !header_filters>
                <div class="filter-section">
                    {COLUMNS
                        .iter()
                        .filter_map(|&(_, filter, label)| filter.map(|col| (col, label)))
                        .map(|(col, label)| {
                            view! {
                                <div class="filter-group">
                                    <label>{label} ":"</label>
                                    {filter_input(state, col, label)}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>

        <div class="table-container">
            <table class=table_class>
                <thead>
                    <tr>
                        {COLUMNS
                            .iter()
                            .map(|&(key, filter, label)| {
                                header_cell(state, open_filters, header_filters, key, filter, label)
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let current = state.with(|s| s.view());
                        if current.page.items.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="6" class="no-data">
                                        <div class="no-data-content">
                                            <div class="no-data-icon">"🔍"</div>
                                            <p>"No matching rows"</p>
                                            <button class="clear-button" on:click=clear>
                                                "Clear filters"
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            current
                                .page
                                .items
                                .into_iter()
                                .map(|row| {
                                    let role = row.role.as_str();
                                    let status = row.status.as_str();
                                    let role_class = format!("role-badge {}", role.to_lowercase());
                                    let status_class =
                                        format!("status-badge {}", status.to_lowercase());
                                    view! {
                                        <tr class="table-row">
                                            <td class="table-cell">{row.id}</td>
                                            <td class="table-cell">{row.name}</td>
                                            <td class="table-cell">{row.email}</td>
                                            <td class="table-cell">
                                                <span class=role_class>{role}</span>
                                            </td>
                                            <td class="table-cell">
                                                <span class=status_class>{status}</span>
                                            </td>
                                            <td class="table-cell">{row.created_at}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>

        <TablePagination state=state />

        <div class="data-stats">
            <div class="stats-item">
                <span class="stats-label">"Total rows:"</span>
                <span class="stats-value">{move || state.with(|s| s.view().total)}</span>
            </div>
            <div class="stats-item">
                <span class="stats-label">"Showing:"</span>
                <span class="stats-value">
                    {move || {
                        state
                            .with(|s| {
                                let v = s.view();
                                if v.page.items.is_empty() {
                                    "0 - 0".to_string()
                                } else {
                                    format!("{} - {}", v.page.first_index + 1, v.page.last_index)
                                }
                            })
                    }}
                </span>
            </div>
            <Show when=move || state.with(|s| s.query().filters.active_count() > 0)>
                <div class="stats-item filters-active">
                    <span class="stats-label">"Active filters:"</span>
                    <span class="stats-value">
                        {move || state.with(|s| s.query().filters.active_count())}
                    </span>
                </div>
            </Show>
        </div>
    }
}

// ==============================================================================
// header and filter rendering
// ==============================================================================

fn header_cell(
    state: RwSignal<TableState>,
    open_filters: RwSignal<Vec<Column>>,
    header_filters: bool,
    key: SortKey,
    filter: Option<Column>,
    label: &'static str,
) -> AnyView {
    let sort_icon = move || {
        state.with(|s| match s.query().sort {
            Some(sort) if sort.key == key => Some(match sort.direction {
                SortDirection::Ascending => "↑",
                SortDirection::Descending => "↓",
            }),
            _ => None,
        })
    };
    let request_sort = move |_| state.update(|s| s.set_sort(key));

    if !header_filters {
        return view! {
            <th class="sortable" on:click=request_sort>
                {label}
                " "
                {sort_icon}
            </th>
        }
        .into_any();
    }

    let filter_open =
        move || filter.is_some_and(|col| open_filters.with(|open| open.contains(&col)));
    // the gear must not also trigger the header's sort click
    let toggle_filter = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if let Some(col) = filter {
            open_filters.update(|open| {
                if let Some(pos) = open.iter().position(|c| *c == col) {
                    open.remove(pos);
                } else {
                    open.push(col);
                }
            });
        }
    };

    view! {
        <th class="table-header">
            <div class="header-content" on:click=request_sort>
                <span class="header-title">{label}</span>
                <span class="header-actions">
                    {sort_icon}
                    <Show when=move || filter.is_some()>
                        <button class="filter-button" on:click=toggle_filter>
                            "⚙️"
                        </button>
                    </Show>
                </span>
            </div>
            <Show when=filter_open>
                <div class="filter-dropdown">
                    {move || filter.map(|col| filter_input(state, col, label))}
                </div>
            </Show>
        </th>
    }
    .into_any()
}

fn filter_input(state: RwSignal<TableState>, column: Column, label: &'static str) -> impl IntoView {
    let placeholder = format!("Filter {}...", label.to_lowercase());
    view! {
        <input
            type="text"
            class="filter-input"
            placeholder=placeholder
            prop:value=move || state.with(|s| s.query().filters.get(column).to_string())
            on:input=move |ev| {
                state.update(|s| s.set_column_filter(column, &event_target_value(&ev)))
            }
        />
    }
}
