use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_add_command, handle_category_command, handle_delete_command, handle_filter_command,
    handle_list_command, handle_lists_command, handle_show_command, handle_sort_command, AddArgs,
    CategoryCommands, FilterCommands, ListArgs, SortArgs,
};
use expense_tracker::config::{paths::DATA_DIR_ENV, ExpensePaths, Settings};
use expense_tracker::display::format_view_state;
use expense_tracker::storage::Storage;

const LOG_ENV: &str = "EXPENSES_LOG";

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record expenses and browse them by category",
    long_about = "A small expense tracker. Record what you spend, file it under a \
                  category (or leave it in the inbox) and browse totals with a saved \
                  filter and sort order."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the available lists with their expense counts
    Lists {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one list: all expenses, the inbox or a category
    #[command(alias = "ls")]
    List(ListArgs),

    /// Record a new expense
    Add(AddArgs),

    /// Show an expense
    Show {
        /// Expense ID (or a unique prefix of it)
        id: String,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (or a unique prefix of it)
        id: String,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Show or change the saved filter
    #[command(subcommand)]
    Filter(FilterCommands),

    /// Change the saved sort order
    Sort(SortArgs),

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Lists { json }) => handle_lists_command(&storage, json)?,
        Some(Commands::List(args)) => handle_list_command(&storage, &settings, args)?,
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::Show { id }) => handle_show_command(&storage, &settings, &id)?,
        Some(Commands::Delete { id }) => handle_delete_command(&storage, &settings, &id)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Filter(cmd)) => handle_filter_command(&storage, &mut settings, cmd)?,
        Some(Commands::Sort(args)) => handle_sort_command(&storage, &mut settings, args)?,
        Some(Commands::Config) => {
            let categories = storage.categories.get_all()?;

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("(override with {})", DATA_DIR_ENV);
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!();
            print!("{}", format_view_state(&settings.view, &categories, &settings));
        }
        None => {
            println!("Expenses - a terminal expense tracker");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses lists' to see your lists.");
        }
    }

    Ok(())
}
