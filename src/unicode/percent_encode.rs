use crate::compat::{Cow, String};
use crate::log::debug;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// C0 control percent-encode set
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Userinfo percent-encode set
/// C0 control + space, ", #, <, >, ?, `, {, }, /, :, ;, =, @, [, \, ], ^, |, %
///
/// `%` is included so that a decoded value re-encodes to a string that
/// decodes back to the same value.
pub const USERINFO_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|')
    .add(b'%');

/// Decode a percent-encoded string.
///
/// Invalid escapes such as `%zz` pass through untouched. When the decoded
/// bytes are not valid UTF-8 the original, still-encoded input is returned.
pub fn percent_decode(input: &str) -> Cow<'_, str> {
    match percent_decode_str(input).decode_utf8() {
        Ok(decoded) => decoded,
        Err(_) => {
            debug!("percent-decoding {input:?} is not UTF-8, keeping it encoded");
            Cow::Borrowed(input)
        }
    }
}

/// Write percent-encoded string directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    // Reserve space to reduce reallocations
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode userinfo directly into buffer (zero-copy if no encoding needed)
pub fn percent_encode_userinfo_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, USERINFO_SET);
}
