//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod expense;
pub mod view;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{
    handle_add_command, handle_delete_command, handle_list_command, handle_lists_command,
    handle_show_command, AddArgs, ListArgs,
};
pub use view::{handle_filter_command, handle_sort_command, FilterArgs, FilterCommands, SortArgs};
