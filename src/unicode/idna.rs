use crate::compat::String;
use crate::log::debug;

/// Normalize a host: trim surrounding whitespace, strip trailing dots,
/// lowercase, then IDNA-encode when any code point is non-ASCII.
///
/// Whitespace and dots are stripped together so `"h . "` becomes `"h"`.
/// IDNA maps ideographic and full-width full stops to `.`, so its output is
/// stripped again. IDNA failures are not fatal: the lowercased host is kept
/// as-is.
pub fn normalize_host(host: &str) -> String {
    let host = host
        .trim_start()
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace());

    // Fast path: pure ASCII hosts only need case folding
    if host.is_ascii() {
        return host.to_ascii_lowercase();
    }

    let lowered = host.to_lowercase();
    domain_to_ascii(&lowered)
        .map(|ascii| ascii.trim_end_matches('.').into())
        .unwrap_or_else(|| {
            debug!("IDNA encoding failed for host {lowered:?}, keeping it verbatim");
            lowered
        })
}

/// Process a non-ASCII domain using the IDNA `ToASCII` algorithm
pub fn domain_to_ascii(domain: &str) -> Option<String> {
    idna::domain_to_ascii(domain).ok()
}
