//! MD5 digest of text

/// Lowercase hex MD5 of the UTF-8 bytes of `text`
pub fn md5_hash(text: &str) -> String {
    let digest = md5::compute(text.as_bytes());
    format!("{:x}", digest)
}
