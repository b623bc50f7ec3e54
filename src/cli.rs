//! Command-line arguments and action dispatch
//!
//! Both the direct CLI and the interactive menu go through [`Action`], so an
//! action behaves the same whichever way it was picked.

use crate::error::ToolResult;
use crate::tools::{self, DateTimeConverter};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Arguments for the daily-tools CLI
#[derive(Parser, Debug)]
#[command(version, about = "Everyday text transforms: MD5, URL and Base64 encoding, timestamp conversion")]
pub struct Args {
    /// Operation to run; starts the interactive menu when omitted
    #[arg(value_enum)]
    pub action: Option<Action>,

    /// Text to transform
    #[arg(allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Read configuration from FILE instead of the default locations
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    pub generate_config: bool,
}

/// A single transform, as named on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Action {
    Md5,
    #[value(alias = "url")]
    UrlEncode,
    #[value(alias = "unurl")]
    UrlDecode,
    #[value(alias = "b64")]
    Base64Encode,
    #[value(alias = "unb64")]
    Base64Decode,
    #[value(alias = "ts2dt")]
    TsToDt,
    #[value(alias = "dt2ts")]
    DtToTs,
    #[value(alias = "now")]
    NowTs,
    #[value(alias = "time")]
    NowDt,
}

impl Action {
    /// Menu order, option `1` first
    pub const ALL: [Action; 9] = [
        Action::Md5,
        Action::UrlEncode,
        Action::UrlDecode,
        Action::Base64Encode,
        Action::Base64Decode,
        Action::TsToDt,
        Action::DtToTs,
        Action::NowTs,
        Action::NowDt,
    ];

    pub fn requires_input(self) -> bool {
        !matches!(self, Action::NowTs | Action::NowDt)
    }

    /// Menu option number, `1..=9`
    pub fn menu_number(self) -> usize {
        Self::ALL.iter().position(|a| *a == self).map(|i| i + 1).unwrap_or(0)
    }

    /// Action for a menu choice such as `"3"`
    pub fn from_menu_choice(choice: &str) -> Option<Action> {
        let number: usize = choice.trim().parse().ok()?;
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Menu entry text
    pub fn title(self) -> &'static str {
        match self {
            Action::Md5 => "MD5 hash",
            Action::UrlEncode => "URL encode",
            Action::UrlDecode => "URL decode",
            Action::Base64Encode => "Base64 encode",
            Action::Base64Decode => "Base64 decode",
            Action::TsToDt => "Timestamp to datetime",
            Action::DtToTs => "Datetime to timestamp",
            Action::NowTs => "Current timestamp",
            Action::NowDt => "Current datetime",
        }
    }

    /// What the menu asks for before running the action
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Action::Md5 => Some("Text to hash with MD5: "),
            Action::UrlEncode => Some("Text to URL encode: "),
            Action::UrlDecode => Some("Text to URL decode: "),
            Action::Base64Encode => Some("Text to Base64 encode: "),
            Action::Base64Decode => Some("Text to Base64 decode: "),
            Action::TsToDt => Some("Timestamp (seconds or milliseconds): "),
            Action::DtToTs => Some("Datetime (e.g. 2024-01-01 12:00:00): "),
            Action::NowTs | Action::NowDt => None,
        }
    }

    /// Label printed in front of the menu's result
    pub fn result_label(self) -> &'static str {
        match self {
            Action::Md5 => "MD5 result",
            Action::UrlEncode => "URL encoded",
            Action::UrlDecode => "URL decoded",
            Action::Base64Encode => "Base64 encoded",
            Action::Base64Decode => "Base64 decoded",
            Action::TsToDt => "Datetime",
            Action::DtToTs => "Timestamp",
            Action::NowTs => "Current timestamp",
            Action::NowDt => "Current datetime",
        }
    }

    /// Run the transform on `input`
    ///
    /// Actions that take no input ignore it.
    pub fn execute(self, input: &str, converter: &DateTimeConverter) -> ToolResult<String> {
        match self {
            Action::Md5 => Ok(tools::md5_hash(input)),
            Action::UrlEncode => Ok(tools::url_encode(input)),
            Action::UrlDecode => Ok(tools::url_decode(input)),
            Action::Base64Encode => Ok(tools::base64_encode(input)),
            Action::Base64Decode => tools::base64_decode(input),
            Action::TsToDt => converter.timestamp_to_datetime(input),
            Action::DtToTs => converter.datetime_to_timestamp(input).map(|ts| ts.to_string()),
            Action::NowTs => Ok(tools::current_timestamp().to_string()),
            Action::NowDt => Ok(tools::current_datetime()),
        }
    }

    /// Text to show for `input`: the result, or the failure message in its place
    ///
    /// # Returns
    /// * `Option<String>` - `None` when the action needs input and `input` is missing or empty
    pub fn output(self, input: Option<&str>, converter: &DateTimeConverter) -> Option<String> {
        let input = input.filter(|s| !s.is_empty());
        if self.requires_input() && input.is_none() {
            return None;
        }

        Some(self.render(input.unwrap_or_default(), converter))
    }

    /// Result of [`Action::execute`], with a failure's message standing in for the value
    pub fn render(self, input: &str, converter: &DateTimeConverter) -> String {
        match self.execute(input, converter) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("{:?} failed: {}", self, e);
                e.to_string()
            }
        }
    }
}
