//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod data_table;
mod layout;
mod menu;
mod pagination;

pub use data_table::DataTable;
pub use layout::Layout;
pub use menu::MenuBar;
pub use pagination::TablePagination;
