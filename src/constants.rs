//! Constants used throughout the application
//!
//! User-facing strings and file names live here so the menu, the CLI and
//! the error messages stay consistent.

/// Output format for every formatted datetime
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Integer parts longer than this many characters are read as milliseconds
pub const SECONDS_MAX_DIGITS: usize = 10;

// Error Messages
pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "Unsupported date format, use e.g. 2024-01-01 12:00:00";
pub const ERROR_INPUT_REQUIRED: &str = "Error: this action requires input";

// Menu
pub const MENU_RULE_WIDTH: usize = 50;
pub const MENU_TITLE: &str = "Daily Tools";
pub const MENU_PROMPT: &str = "Choose an option (0-9): ";
pub const MENU_INVALID_CHOICE: &str = "Invalid choice, please try again!";
pub const MENU_GOODBYE: &str = "Thanks for using Daily Tools, goodbye!";
pub const MENU_PRESS_ENTER: &str = "Press Enter to continue...";

// Files
pub const APP_DIR_NAME: &str = "daily-tools";
pub const LOCAL_CONFIG_FILE: &str = "daily-tools.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "daily-tools.log";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
