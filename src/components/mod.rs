//! UI Components
//!
//! Layout, page sections and modal overlays.

mod sidebar;
mod top_bar;
mod page_section;
mod filter_buttons;
mod overview_page;
mod tasks_page;
mod projects_page;
mod notes_page;
mod analytics_page;
mod documents_page;
mod modal;
mod task_form;
mod project_form;
mod note_form;
mod delete_confirm;
mod note_view;

pub use sidebar::Sidebar;
pub use top_bar::TopBar;
pub use page_section::PageSection;
pub use filter_buttons::FilterButtons;
pub use overview_page::OverviewPage;
pub use tasks_page::TasksPage;
pub use projects_page::ProjectsPage;
pub use notes_page::NotesPage;
pub use analytics_page::AnalyticsPage;
pub use documents_page::DocumentsPage;
pub use modal::{ModalFrame, ModalHost};
