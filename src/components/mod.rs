//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod profile_editor;
mod sign_in_form;
mod sign_up_form;
mod theme_toggle;
mod toast;
mod todo_form;
mod todo_list;
mod todo_stats;

pub use delete_confirm_button::DeleteConfirmButton;
pub use profile_editor::ProfileEditor;
pub use sign_in_form::SignInForm;
pub use sign_up_form::SignUpForm;
pub use theme_toggle::ThemeToggle;
pub use toast::Toast;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_stats::TodoStats;
