use crate::components::UriComponents;
use crate::compat::String;
use crate::types::Handler;
use crate::unicode::percent_encode::percent_encode_userinfo_into;

/// Serialize components to their canonical string form.
///
/// Opaque results become `<scheme>:<opaque>` and every other field is
/// ignored. Hierarchical results become
/// `<scheme>://[<username>[:<password>]@]<host>[:<port>]<path>[?<query>][#<fragment>]`
/// with the path defaulting to `/`.
///
/// Userinfo is re-encoded and IPv6 hosts are bracketed so that parsing the
/// output yields the same components again. A host that already holds a
/// bracket is written as-is, since it was only kept whole because its
/// brackets did not lead.
pub fn serialize(components: &UriComponents) -> String {
    let mut buffer = String::with_capacity(
        components.scheme.len()
            + components.opaque.len()
            + components.username.len()
            + components.password.len()
            + components.host.len()
            + components.path.len()
            + components.query.len()
            + components.fragment.len()
            + 16,
    );

    buffer.push_str(&components.scheme);
    buffer.push(':');

    if !components.opaque.is_empty() || components.handler() == Handler::Opaque {
        buffer.push_str(&components.opaque);
        return buffer;
    }

    buffer.push_str("//");

    if components.has_credentials() {
        percent_encode_userinfo_into(&mut buffer, &components.username);
        if !components.password.is_empty() {
            buffer.push(':');
            percent_encode_userinfo_into(&mut buffer, &components.password);
        }
        buffer.push('@');
    }

    let host = &components.host;
    if host.contains(':') && !host.contains('[') && !host.contains(']') {
        buffer.push('[');
        buffer.push_str(host);
        buffer.push(']');
    } else {
        buffer.push_str(host);
    }

    if !components.port.is_empty() {
        buffer.push(':');
        buffer.push_str(&components.port);
    }

    if components.path.is_empty() {
        buffer.push('/');
    } else {
        buffer.push_str(&components.path);
    }

    if !components.query.is_empty() {
        buffer.push('?');
        buffer.push_str(&components.query);
    }

    if !components.fragment.is_empty() {
        buffer.push('#');
        buffer.push_str(&components.fragment);
    }

    buffer
}
