use crate::checkers::parse_port;
use crate::compat::{Cow, String};
use crate::error::Result;
use crate::scheme::get_scheme_type;
use crate::types::{Handler, SchemeType};

/// Structured, normalized interpretation of a URI.
///
/// Exactly one lane is populated: hierarchical results carry userinfo, host,
/// port and path, opaque results carry only `opaque`. Query and fragment are
/// kept undecoded; username and password are percent-decoded.
///
/// ```
/// use uri_interpret::UriComponents;
///
/// let uri = UriComponents::parse("HTTP://user@Example.COM:80/a/./b/../c?q=1#top")?;
/// assert_eq!(uri.scheme(), "http");
/// assert_eq!(uri.host(), "example.com");
/// assert_eq!(uri.port(), "");
/// assert_eq!(uri.path(), "/a/c");
/// assert_eq!(uri.to_string(), "http://user@example.com/a/c?q=1#top");
/// # Ok::<(), uri_interpret::MalformedUri>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UriComponents {
    pub(crate) scheme: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) host: String,
    pub(crate) port: String,
    pub(crate) path: String,
    pub(crate) query: String,
    pub(crate) fragment: String,
    pub(crate) opaque: String,
}

impl UriComponents {
    /// Parse a URI string.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedUri`](crate::MalformedUri) when the scheme is missing
    /// or a hierarchical scheme lacks its `//`.
    pub fn parse(input: &str) -> Result<Self> {
        crate::parser::parse_uri(input)
    }

    /// Lowercase scheme, without the trailing `:`
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Percent-decoded username (empty if absent)
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Percent-decoded password (empty if absent)
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Normalized host; IPv6 literals are stored without brackets
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Canonical port string, empty when unspecified or equal to the default
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Normalized path (empty only for opaque results)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query, without the leading `?`
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Raw fragment, without the leading `#`
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Raw text after the scheme colon for opaque schemes
    pub fn opaque(&self) -> &str {
        &self.opaque
    }

    /// Get the scheme type
    pub fn scheme_type(&self) -> SchemeType {
        get_scheme_type(&self.scheme)
    }

    /// Strategy the scheme dispatches to
    pub fn handler(&self) -> Handler {
        self.scheme_type().handler()
    }

    /// Check if this is an opaque-lane result
    pub fn is_opaque(&self) -> bool {
        !self.opaque.is_empty() || self.handler() == Handler::Opaque
    }

    /// Check if URI has credentials (username or password)
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() || !self.password.is_empty()
    }

    /// Check if URI has a non-default port
    pub fn has_port(&self) -> bool {
        !self.port.is_empty()
    }

    /// Port as a number; None when unspecified or wider than `u16`
    pub fn port_number(&self) -> Option<u16> {
        parse_port(&self.port)
    }

    /// Flat field-name to value view, including the `normalized` serialization.
    ///
    /// Absent fields are empty strings. Order: scheme, username, password, host,
    /// port, path, query, fragment, opaque, normalized.
    pub fn fields(&self) -> [(&'static str, Cow<'_, str>); 10] {
        [
            ("scheme", Cow::Borrowed(self.scheme.as_str())),
            ("username", Cow::Borrowed(self.username.as_str())),
            ("password", Cow::Borrowed(self.password.as_str())),
            ("host", Cow::Borrowed(self.host.as_str())),
            ("port", Cow::Borrowed(self.port.as_str())),
            ("path", Cow::Borrowed(self.path.as_str())),
            ("query", Cow::Borrowed(self.query.as_str())),
            ("fragment", Cow::Borrowed(self.fragment.as_str())),
            ("opaque", Cow::Borrowed(self.opaque.as_str())),
            ("normalized", Cow::Owned(crate::serializer::serialize(self))),
        ]
    }
}

impl core::str::FromStr for UriComponents {
    type Err = crate::MalformedUri;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}

impl core::fmt::Display for UriComponents {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&crate::serializer::serialize(self))
    }
}
