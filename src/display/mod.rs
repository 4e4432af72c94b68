//! Display formatting for terminal output

pub mod category;
pub mod expense;
pub mod view;

pub use category::{format_category_list, format_menu};
pub use expense::{expense_list_json, format_expense_details, format_expense_list, list_title};
pub use view::format_view_state;
