use crate::compat::{String, ToString};
use crate::types::SchemeType;

/// Check if a string is a non-empty run of ASCII digits.
/// Other Unicode decimal digits (e.g. full-width) do not count.
pub fn is_digit_string(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Canonicalize a port string for a scheme.
///
/// Returns an empty string when the port is absent, not all digits, or equal
/// to the scheme's default port. Otherwise the decimal string without leading
/// zeros is returned. Works on the digit string itself, so ports wider than
/// `u16` are kept as written rather than overflowing.
pub fn normalize_port(port: &str, scheme_type: SchemeType) -> String {
    if !is_digit_string(port) {
        return String::new();
    }

    let trimmed = port.trim_start_matches('0');
    let canonical = if trimmed.is_empty() { "0" } else { trimmed };

    let is_default = scheme_type
        .default_port()
        .is_some_and(|default| canonical.parse::<u16>() == Ok(default));
    if is_default {
        return String::new();
    }

    canonical.to_string()
}

/// Parse a canonical port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if !is_digit_string(port) {
        return None;
    }
    port.parse::<u16>().ok()
}
