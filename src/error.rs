/// The single failure kind of the parser: the input cannot be interpreted as a URI.
///
/// Every variant is fail-fast. Parsing is a pure function of its input, so a
/// caller retrying the same string gets the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedUri {
    /// No run of ASCII letters followed by `:` at the start of the input
    InvalidScheme,
    /// A hierarchical scheme is followed by fewer than two `/` and no `\`
    ExpectedAuthoritySlashes,
}

impl MalformedUri {
    /// Short diagnostic reason, suitable for surfacing to a caller verbatim.
    pub fn reason(self) -> &'static str {
        match self {
            Self::InvalidScheme => "missing or invalid scheme",
            Self::ExpectedAuthoritySlashes => "expected '//' after scheme",
        }
    }
}

impl core::fmt::Display for MalformedUri {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.reason())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MalformedUri {}

/// Result type for URI parsing operations
pub type Result<T> = core::result::Result<T, MalformedUri>;
