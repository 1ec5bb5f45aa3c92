//! ==============================================================================
//! pipeline.rs - pagination slicer and orchestrator
//! ==============================================================================
//!
//! purpose:
//!     owns the query state for one table instance and recomputes
//!     filter -> stable sort -> paginate on demand. every mutation except
//!     page navigation resets the current page to 1; out-of-range pages
//!     are clamped, never rejected.
//!
//! state machine:
//!     set_free_text / set_column_filter / set_sort / clear_all
//!         -> recompute, page := 1
//!     set_page
//!         -> recompute, page := clamp(requested, 1..=page_count)
//!
//! ==============================================================================

use crate::query::{Column, QueryState, Sort, SortDirection, SortKey};
use crate::row::Row;

/// rows shown per page on both table pages
pub const PAGE_SIZE: usize = 10;

// ==============================================================================
// pagination slicer
// ==============================================================================

/// one fixed-size window out of the filtered+sorted sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<Row>,
    /// the clamped 1-indexed page actually shown
    pub page: usize,
    /// always >= 1, even for an empty sequence
    pub page_count: usize,
    /// 0-based index of the first item in the full sequence
    pub first_index: usize,
    /// first_index + items.len()
    pub last_index: usize,
}

/// slice a page out of `rows`, clamping `page` into [1, page_count].
///
/// `items` is empty iff `rows` is empty.
pub fn paginate(rows: &[Row], page: usize, page_size: usize) -> Page {
    let page_count = page_count(rows.len(), page_size);
    let page = page.clamp(1, page_count);
    let first_index = (page - 1) * page_size;
    let items: Vec<Row> = rows
        .iter()
        .skip(first_index)
        .take(page_size)
        .cloned()
        .collect();
    let last_index = first_index + items.len();
    Page {
        items,
        page,
        page_count,
        first_index,
        last_index,
    }
}

fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}

// ==============================================================================
// orchestrator
// ==============================================================================

/// slicer output plus the filtered-and-sorted total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub page: Page,
    /// number of rows matching the current query, across all pages
    pub total: usize,
}

/// one table instance: the immutable row source plus its query state
#[derive(Debug, Clone)]
pub struct TableState {
    rows: Vec<Row>,
    query: QueryState,
}

impl TableState {
    pub fn new(rows: Vec<Row>) -> Self {
        TableState {
            rows,
            query: QueryState::default(),
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn set_free_text(&mut self, text: &str) {
        self.query.free_text = text.to_string();
        self.query.page = 1;
    }

    pub fn set_column_filter(&mut self, column: Column, pattern: &str) {
        self.query.filters.set(column, pattern);
        self.query.page = 1;
    }

    /// toggle direction when `key` is already active, otherwise sort
    /// ascending by `key`
    pub fn set_sort(&mut self, key: SortKey) {
        self.query.sort = Some(match self.query.sort {
            Some(current) if current.key == key => Sort {
                key,
                direction: match current.direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                },
            },
            _ => Sort::ascending(key),
        });
        self.query.page = 1;
    }

    /// navigate without disturbing filters or sort; the stored page is
    /// clamped against the current filtered count
    pub fn set_page(&mut self, page: usize) {
        let visible = self
            .rows
            .iter()
            .filter(|row| self.query.matches(row))
            .count();
        self.query.page = page.clamp(1, page_count(visible, PAGE_SIZE));
    }

    /// reset free text, column filters, sort, and page to their defaults
    pub fn clear_all(&mut self) {
        self.query = QueryState::default();
    }

    /// recompute the full chain: filter, stable sort, paginate
    pub fn view(&self) -> TableView {
        let mut matched: Vec<Row> = self
            .rows
            .iter()
            .filter(|row| self.query.matches(row))
            .cloned()
            .collect();

        if let Some(sort) = self.query.sort {
            // Vec::sort_by is stable, so tied rows keep source order
            matched.sort_by(|a, b| sort.compare(a, b));
        }

        let total = matched.len();
        let page = paginate(&matched, self.query.page, PAGE_SIZE);
        TableView { page, total }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::{Role, Status};

    fn row(id: u32, role: Role, status: Status, created_at: &str) -> Row {
        Row {
            id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            role,
            status,
            created_at: created_at.to_string(),
        }
    }

    /// 100 rows with deterministic role/status so filter counts are known:
    /// roles cycle Admin/User/Editor/Viewer, statuses cycle
    /// Active/Inactive/Pending, dates descend one day per id
    fn fixture() -> Vec<Row> {
        (1..=100u32)
            .map(|id| {
                let role = Role::ALL[(id as usize - 1) % 4];
                let status = Status::ALL[(id as usize - 1) % 3];
                let date = format!("2026-0{}-{:02}", (id - 1) / 28 + 1, (id - 1) % 28 + 1);
                row(id, role, status, &date)
            })
            .collect()
    }

    // ===========================================================================
    // slicer tests
    // ===========================================================================

    #[test]
    fn test_paginate_basic_window() {
        let rows = fixture();
        let page = paginate(&rows, 2, 10);
        assert_eq!(page.page_count, 10);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.first_index, 10);
        assert_eq!(page.last_index, 20);
        assert_eq!(page.items[0].id, 11);
    }

    #[test]
    fn test_paginate_partial_last_page() {
        let rows: Vec<Row> = fixture().into_iter().take(25).collect();
        let page = paginate(&rows, 3, 10);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.first_index, 20);
        assert_eq!(page.last_index, 25);
    }

    #[test]
    fn test_paginate_clamps_out_of_range() {
        let rows = fixture();
        let high = paginate(&rows, 9999, 10);
        assert_eq!(high.page, 10);
        assert_eq!(high.items.len(), 10);
        assert_eq!(high.items[0].id, 91);

        let low = paginate(&rows, 0, 10);
        assert_eq!(low.page, 1);
        assert_eq!(low.items[0].id, 1);
    }

    #[test]
    fn test_paginate_empty_sequence() {
        let page = paginate(&[], 5, 10);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.first_index, 0);
        assert_eq!(page.last_index, 0);
    }

    // ===========================================================================
    // orchestrator: filtering
    // ===========================================================================

    #[test]
    fn test_view_items_never_exceed_page_size() {
        let mut state = TableState::new(fixture());
        assert!(state.view().page.items.len() <= PAGE_SIZE);
        state.set_free_text("user");
        assert!(state.view().page.items.len() <= PAGE_SIZE);
        state.set_free_text("no such row anywhere");
        assert!(state.view().page.items.len() <= PAGE_SIZE);
    }

    #[test]
    fn test_free_text_admin_matches_admin_roles() {
        // fixture assigns Admin to ids 1, 5, 9, ... -> 25 of 100
        let mut state = TableState::new(fixture());
        state.set_free_text("Admin");
        let view = state.view();
        assert_eq!(view.total, 25);
        assert!(view.page.items.iter().all(|r| r.role == Role::Admin));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let mut state = TableState::new(fixture());
        state.set_free_text("admin");
        state.set_column_filter(Column::Status, "active");
        let first: Vec<Row> = {
            let q = state.query().clone();
            fixture().into_iter().filter(|r| q.matches(r)).collect()
        };
        let second: Vec<Row> = {
            let q = state.query().clone();
            first.iter().filter(|r| q.matches(r)).cloned().collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_result_is_normal() {
        let mut state = TableState::new(fixture());
        state.set_free_text("admin");
        state.set_column_filter(Column::Role, "viewer");
        let view = state.view();
        assert_eq!(view.total, 0);
        assert!(view.page.items.is_empty());
        assert_eq!(view.page.page_count, 1);
    }

    #[test]
    fn test_empty_dataset() {
        let state = TableState::new(Vec::new());
        let view = state.view();
        assert_eq!(view.total, 0);
        assert_eq!(view.page.page_count, 1);
        assert!(view.page.items.is_empty());
    }

    // ===========================================================================
    // orchestrator: sorting
    // ===========================================================================

    #[test]
    fn test_sort_toggle_cycle() {
        let mut state = TableState::new(fixture());

        state.set_sort(SortKey::Id);
        assert_eq!(state.view().page.items[0].id, 1);

        state.set_sort(SortKey::Id);
        assert_eq!(state.view().page.items[0].id, 100);

        state.set_sort(SortKey::Id);
        assert_eq!(state.view().page.items[0].id, 1);
    }

    #[test]
    fn test_sort_switch_key_resets_to_ascending() {
        let mut state = TableState::new(fixture());
        state.set_sort(SortKey::Id);
        state.set_sort(SortKey::Id); // descending
        state.set_sort(SortKey::Role);
        let sort = state.query().sort.unwrap();
        assert_eq!(sort.key, SortKey::Role);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        // all Admin rows tie on role, so they must keep id (source) order
        let mut state = TableState::new(fixture());
        state.set_sort(SortKey::Role);
        let view = state.view();
        let ids: Vec<u32> = view.page.items.iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids[0], 1); // first Admin in source order
    }

    #[test]
    fn test_repeated_view_is_idempotent() {
        let mut state = TableState::new(fixture());
        state.set_sort(SortKey::Status);
        let a = state.view();
        let b = state.view();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_sort_key_preserves_source_order() {
        let state = TableState::new(fixture());
        let view = state.view();
        let ids: Vec<u32> = view.page.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_descending_id_puts_last_row_first() {
        let mut state = TableState::new(fixture());
        state.set_sort(SortKey::Id);
        state.set_sort(SortKey::Id);
        state.set_page(1);
        assert_eq!(state.view().page.items[0].id, 100);
    }

    // ===========================================================================
    // orchestrator: page resets and clamping
    // ===========================================================================

    #[test]
    fn test_set_page_clamps() {
        let mut state = TableState::new(fixture());
        state.set_page(9999);
        assert_eq!(state.query().page, 10);
        let view = state.view();
        assert_eq!(view.page.page, 10);
        assert_eq!(view.page.items.len(), 10);

        state.set_page(0);
        assert_eq!(state.query().page, 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = TableState::new(fixture());
        state.set_page(5);
        assert_eq!(state.query().page, 5);
        state.set_free_text("user");
        assert_eq!(state.query().page, 1);

        state.set_page(3);
        state.set_column_filter(Column::Name, "user");
        assert_eq!(state.query().page, 1);

        state.set_page(2);
        state.set_sort(SortKey::Email);
        assert_eq!(state.query().page, 1);
    }

    #[test]
    fn test_page_navigation_preserves_page() {
        let mut state = TableState::new(fixture());
        state.set_page(4);
        assert_eq!(state.view().page.page, 4);
        state.set_page(5);
        assert_eq!(state.view().page.page, 5);
    }

    #[test]
    fn test_narrowing_filter_then_set_page_clamps_to_new_count() {
        let mut state = TableState::new(fixture());
        state.set_free_text("Admin"); // 25 rows, 3 pages
        state.set_page(7);
        assert_eq!(state.query().page, 3);
    }

    #[test]
    fn test_clear_all_restores_fresh_view() {
        let rows = fixture();
        let fresh = TableState::new(rows.clone()).view();

        let mut state = TableState::new(rows);
        state.set_free_text("admin");
        state.set_column_filter(Column::Status, "pending");
        state.set_sort(SortKey::CreatedAt);
        state.set_sort(SortKey::CreatedAt);
        state.set_page(2);
        state.clear_all();

        assert_eq!(state.view(), fresh);
        assert_eq!(state.query(), &QueryState::default());
    }
}
