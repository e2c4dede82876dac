//! UI Components
//!
//! Reusable Leptos components.

mod dashboard;
mod delete_confirm_button;
mod language_toggle;
mod login_form;
mod status_bar;
mod status_lanes;
mod task_card;
mod task_controls;
mod task_form;

pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use language_toggle::LanguageToggle;
pub use login_form::LoginForm;
pub use status_bar::StatusBar;
pub use status_lanes::StatusLanes;
pub use task_card::{card_key, TaskCard};
pub use task_controls::TaskControls;
pub use task_form::{FormMode, TaskForm};
