//! UI Components
//!
//! Pages and reusable Leptos components.

mod delete_confirm_button;
mod field_error;
mod login_page;
mod navbar;
mod not_found;
mod register_page;
mod task_form_page;
mod task_list_page;
mod toast_banner;

pub use delete_confirm_button::DeleteConfirmButton;
pub use field_error::FieldError;
pub use login_page::LoginPage;
pub use navbar::Navbar;
pub use not_found::NotFound;
pub use register_page::RegisterPage;
pub use task_form_page::TaskFormPage;
pub use task_list_page::TaskListPage;
pub use toast_banner::ToastBanner;
