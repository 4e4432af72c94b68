//! Category CLI commands
//!
//! Implements CLI commands for the category catalog.

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::ExpenseResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
    },

    /// Delete a category
    ///
    /// Expenses in the category keep their reference and still show up
    /// under "All".
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> ExpenseResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add { name } => {
            let category = service.create(&name)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Delete { category } => {
            let category = service.require(&category)?;
            let orphaned = service.delete(category.id)?;

            println!("Deleted category: {}", category.name);
            if orphaned > 0 {
                println!(
                    "  {} expense(s) still reference it and remain listed under All",
                    orphaned
                );
            }
        }
    }

    Ok(())
}
