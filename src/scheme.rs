use crate::compat::String;
use crate::error::{MalformedUri, Result};
use crate::types::{Handler, SchemeType};

/// Get the scheme type from a lowercase scheme string.
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    // Perfect hash: filter by length first, then first byte, then full comparison
    match (bytes.len(), bytes.first()) {
        (2, Some(b'w')) if bytes == b"ws" => SchemeType::Ws,
        (3, Some(b'w')) if bytes == b"wss" => SchemeType::Wss,
        (3, Some(b'f')) if bytes == b"ftp" => SchemeType::Ftp,
        (3, Some(b'u')) if bytes == b"urn" => SchemeType::Urn,
        (3, Some(b't')) if bytes == b"tel" => SchemeType::Tel,
        (4, Some(b'h')) if bytes == b"http" => SchemeType::Http,
        (4, Some(b'f')) if bytes == b"file" => SchemeType::File,
        (4, Some(b'n')) if bytes == b"news" => SchemeType::News,
        (5, Some(b'h')) if bytes == b"https" => SchemeType::Https,
        (6, Some(b'm')) if bytes == b"mailto" => SchemeType::Mailto,
        _ => SchemeType::Other,
    }
}

/// Select the parsing strategy for a lowercase scheme.
pub fn dispatch(scheme: &str) -> Handler {
    get_scheme_type(scheme).handler()
}

/// Scan the leading scheme token.
///
/// Accepts a maximal run of ASCII letters that must be immediately followed
/// by `:`. Returns the lowercased scheme and the cursor just past the colon.
pub fn scan_scheme(input: &str) -> Result<(String, usize)> {
    let bytes = input.as_bytes();
    let end = bytes
        .iter()
        .position(|b| !b.is_ascii_alphabetic())
        .unwrap_or(bytes.len());

    if end == 0 || bytes.get(end) != Some(&b':') {
        return Err(MalformedUri::InvalidScheme);
    }

    Ok((input[..end].to_ascii_lowercase(), end + 1))
}
