//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings persistence, including the saved list view state

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
