//! ==============================================================================
//! query.rs - predicate and comparator engines
//! ==============================================================================
//!
//! purpose:
//!     defines the query state (free-text search, per-column filters, sort
//!     directive, current page) and the two pure decisions derived from it:
//!     does a row match, and how do two rows order.
//!
//! semantics:
//!     - free text matches case-insensitively as a substring of any of
//!       name/email/role/status (OR across fields)
//!     - each non-empty column filter must match its field (AND across
//!       columns); patterns are taken literally, whitespace included
//!     - sorting compares the displayed value: id numerically, everything
//!       else lexicographically (role/status by label, dates as YYYY-MM-DD
//!       strings, which orders chronologically)
//!
//! ==============================================================================

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::row::Row;

// ==============================================================================
// columns and sort directives
// ==============================================================================

/// columns that accept a per-column filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    Name,
    Email,
    Role,
    Status,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Name, Column::Email, Column::Role, Column::Status];
}

/// fields a table can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Id,
    Name,
    Email,
    Role,
    Status,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// active sort directive: which key, which way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Sort {
    pub fn ascending(key: SortKey) -> Self {
        Sort {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// compare two rows under this directive.
    ///
    /// equal keys yield Equal in both directions (Ordering::reverse maps
    /// Equal to Equal), so a stable sort keeps tied rows in source order.
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let natural = match self.key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Email => a.email.cmp(&b.email),
            SortKey::Role => a.role.as_str().cmp(b.role.as_str()),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match self.direction {
            SortDirection::Ascending => natural,
            SortDirection::Descending => natural.reverse(),
        }
    }
}

// ==============================================================================
// column filters
// ==============================================================================

/// per-column substring patterns; empty string = no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilters {
    name: String,
    email: String,
    role: String,
    status: String,
}

impl ColumnFilters {
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Email => &self.email,
            Column::Role => &self.role,
            Column::Status => &self.status,
        }
    }

    pub fn set(&mut self, column: Column, pattern: &str) {
        let slot = match column {
            Column::Name => &mut self.name,
            Column::Email => &mut self.email,
            Column::Role => &mut self.role,
            Column::Status => &mut self.status,
        };
        *slot = pattern.to_string();
    }

    pub fn clear(&mut self) {
        *self = ColumnFilters::default();
    }

    /// number of columns with a non-empty pattern
    pub fn active_count(&self) -> usize {
        Column::ALL
            .iter()
            .filter(|&&c| !self.get(c).is_empty())
            .count()
    }
}

// ==============================================================================
// query state
// ==============================================================================

/// everything that determines which rows are visible
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub free_text: String,
    pub filters: ColumnFilters,
    pub sort: Option<Sort>,
    /// 1-indexed current page
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            free_text: String::new(),
            filters: ColumnFilters::default(),
            sort: None,
            page: 1,
        }
    }
}

impl QueryState {
    /// predicate engine: does `row` satisfy the current constraints?
    pub fn matches(&self, row: &Row) -> bool {
        // free text: OR across the four searchable fields
        if !self.free_text.is_empty() {
            let term = self.free_text.to_lowercase();
            let hit = contains_ci(&row.name, &term)
                || contains_ci(&row.email, &term)
                || contains_ci(row.role.as_str(), &term)
                || contains_ci(row.status.as_str(), &term);
            if !hit {
                return false;
            }
        }

        // column filters: AND across all non-empty patterns
        for column in Column::ALL {
            let pattern = self.filters.get(column);
            if pattern.is_empty() {
                continue;
            }
            let field = match column {
                Column::Name => row.name.as_str(),
                Column::Email => row.email.as_str(),
                Column::Role => row.role.as_str(),
                Column::Status => row.status.as_str(),
            };
            if !contains_ci(field, &pattern.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

/// case-insensitive substring test; `needle` must already be lowercased
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ==============================================================================
// tests
// ==============================================================================
