//! ==============================================================================
//! lib.rs - tabular view pipeline
//! ==============================================================================
//!
//! purpose:
//!     pure filter -> sort -> paginate pipeline shared by both table pages
//!     of the console. no dom, no async - everything here is synchronous
//!     recomputation over an in-memory dataset, which keeps the whole
//!     pipeline unit-testable on the native target.
//!
//! relationships:
//!     - used by: console (basic and advanced table pages)
//!
//! design rationale:
//!     the two table pages differ only in which filter controls they show,
//!     so the query/sort/page logic lives here exactly once instead of
//!     being duplicated per page.
//!
//! ==============================================================================

mod pipeline;
mod query;
mod row;

pub use pipeline::{paginate, Page, TableState, TableView, PAGE_SIZE};
pub use query::{Column, ColumnFilters, QueryState, Sort, SortDirection, SortKey};
pub use row::{sample_rows, Role, Row, Status};
