//! Daily Tools - everyday text transforms for the terminal
//!
//! MD5 hashing, URL encoding, Base64 encoding and timestamp conversion,
//! available as a direct command-line call or through an interactive menu.
//!
//! # Modules
//!
//! * [`tools`] - The transforms and the timestamp/datetime converter
//! * [`cli`] - Argument parsing and action dispatch
//! * [`menu`] - Interactive numbered menu
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging setup

/// Command-line arguments and the shared action table
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Per-operation error type
pub mod error;

/// Logging setup for the optional log file
pub mod logger;

/// Interactive menu loop
pub mod menu;

/// Hashing, encoding and time conversion
pub mod tools;

pub use error::{ToolError, ToolResult};
