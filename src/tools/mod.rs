//! The transforms themselves.
//!
//! Hashing, URL and Base64 helpers are thin wrappers over their crates. The
//! [`datetime`] module holds the one piece with real decisions in it: the
//! second/millisecond guess and the ordered list of accepted date formats.

pub mod base64;
pub mod datetime;
pub mod hash;
pub mod url;

pub use self::base64::{base64_decode, base64_encode};
pub use self::datetime::{current_datetime, current_timestamp, DateTimeConverter, FormatSet, InputFormat};
pub use self::hash::md5_hash;
pub use self::url::{url_decode, url_encode};
