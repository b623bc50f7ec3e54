//! Per-operation failures
//!
//! Every tool returns its failure as a value. The menu and the CLI print the
//! `Display` text in place of a result, so the messages here are what the
//! user sees.

use crate::constants::UNSUPPORTED_FORMAT_MESSAGE;

/// Failure of a single transform
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Conversion failed: '{input}' is not a valid timestamp")]
    InvalidTimestamp { input: String },

    #[error("Conversion failed: timestamp {input} is out of range")]
    TimestampOutOfRange { input: String },

    #[error("{}", UNSUPPORTED_FORMAT_MESSAGE)]
    UnsupportedFormat,

    #[error("Decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoding failed: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type ToolResult<T> = Result<T, ToolError>;
