//! ==============================================================================
//! pages/mod.rs - routed pages
//! ==============================================================================

mod api_delete;
mod api_get;
mod api_post;
mod api_put;
mod info;
mod tables;

pub use api_delete::DeleteExamplePage;
pub use api_get::GetExamplePage;
pub use api_post::PostExamplePage;
pub use api_put::PutExamplePage;
pub use info::{
    AccountSettingsPage, DashboardPage, HomePage, PreferencesPage, ProfileEditPage, ProfilePage,
    SecuritySettingsPage, SettingsPage,
};
pub use tables::{AdvancedTablePage, TablePage};
