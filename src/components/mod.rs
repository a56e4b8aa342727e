//! UI Components
//!
//! Leptos components for the desk's sections, forms, tables and report.

mod entity_form;
mod nav_bar;
mod notice_bar;
mod page_section;
mod record_table;
mod report_panel;

pub use entity_form::EntityForm;
pub use nav_bar::NavBar;
pub use notice_bar::NoticeBar;
pub use page_section::PageSection;
pub use record_table::RecordTable;
pub use report_panel::ReportPanel;
