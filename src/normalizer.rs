use crate::components::UriComponents;

/// Final canonicalization pass, applied whichever strategy ran.
///
/// Re-affirms scheme and host lowercasing. Idempotent: values produced by
/// the scheme scanner and the authority parser pass through unchanged.
pub fn normalize(components: &mut UriComponents) {
    components.scheme.make_ascii_lowercase();

    if components.host.is_ascii() {
        components.host.make_ascii_lowercase();
    } else {
        components.host = components.host.to_lowercase();
    }
}
