//! Base64 encoding of text

use base64::alphabet;
use base64::engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine as _};

use crate::error::{ToolError, ToolResult};

/// Standard alphabet, decoding only the data before the padding and ignoring leftover bits
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

pub fn base64_encode(text: &str) -> String {
    general_purpose::STANDARD.encode(text.as_bytes())
}

/// Decode standard Base64 into UTF-8 text
///
/// Characters outside the alphabet are discarded first, so whitespace and
/// stray punctuation do not fail the decode. Decoding stops at the first
/// padding group; surplus `=` and anything after it are ignored, as are
/// non-zero trailing bits. Missing padding is still an error.
pub fn base64_decode(text: &str) -> ToolResult<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        .collect();

    let data_len = cleaned.find('=').unwrap_or(cleaned.len());
    let (data, rest) = cleaned.split_at(data_len);
    let padding = rest.chars().take_while(|c| *c == '=').count();
    if padding < (4 - data.len() % 4) % 4 {
        return Err(ToolError::Base64(DecodeError::InvalidPadding));
    }

    let bytes = LENIENT.decode(data)?;
    Ok(String::from_utf8(bytes)?)
}
