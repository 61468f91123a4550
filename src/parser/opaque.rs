use super::builder::UriBuilder;

/// Capture everything after the scheme colon verbatim.
/// No host, port, userinfo or path is ever produced for an opaque URI.
pub fn capture_opaque(input: &str, pointer: usize, builder: &mut UriBuilder) {
    builder.set_opaque(&input[pointer..]);
}
