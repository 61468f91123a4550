use super::builder::UriBuilder;
use crate::checkers::normalize_port;
use crate::helpers::find_authority_end;
use crate::log::debug;
use crate::unicode::idna::normalize_host;
use crate::unicode::percent_encode::percent_decode;

/// Parse the authority starting at `pointer` and return the cursor after it.
///
/// Every '@' flushes the text since the previous flush as userinfo, so a
/// later '@' overwrites what an earlier one recorded: `a@b@host` yields the
/// username `b`, not `a@b`. Whatever follows the last '@' is host[:port].
pub fn parse_authority(input: &str, pointer: usize, builder: &mut UriBuilder) -> usize {
    let end = find_authority_end(input.as_bytes(), pointer);
    let authority = &input[pointer..end];

    let mut flushed = 0;
    for at in memchr::memchr_iter(b'@', authority.as_bytes()) {
        if flushed > 0 {
            debug!("userinfo {:?} overwritten by a later '@'", &authority[..flushed - 1]);
        }
        let userinfo = &authority[flushed..at];
        let (username, password) = userinfo.split_once(':').unwrap_or((userinfo, ""));
        builder.set_userinfo(percent_decode(username), percent_decode(password));
        flushed = at + 1;
    }

    let (host, port) = split_host_port(&authority[flushed..]);
    let canonical_port = normalize_port(port, builder.scheme_type());
    if canonical_port.is_empty() && !port.is_empty() {
        debug!("port {port:?} dropped as default or non-numeric");
    }
    builder.set_host_port(normalize_host(host), canonical_port);

    end
}

/// Split a host[:port] segment.
///
/// A segment holding both '[' and ']' is an IPv6 literal: when it starts with
/// '[' the host is the text up to the first ']' and the port follows a ':'
/// right after it; otherwise the whole segment is the host. Any other segment
/// splits on its last ':'.
pub fn split_host_port(segment: &str) -> (&str, &str) {
    if segment.contains('[') && segment.contains(']') {
        return segment
            .strip_prefix('[')
            .and_then(|inner| inner.split_once(']'))
            .map_or((segment, ""), |(host, rest)| {
                (host, rest.strip_prefix(':').unwrap_or(""))
            });
    }

    segment.rsplit_once(':').unwrap_or((segment, ""))
}
