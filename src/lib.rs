//! Lenient, reproducible URI interpretation.
//!
//! Parses any URI string into [`UriComponents`] and serializes it back to a
//! canonical form. The interpretation deliberately mirrors browser-style
//! leniency (backslash separators, repeated `@` in the authority) so that
//! tooling can reason about how ambiguous URIs are understood.
//!
//! ```
//! let uri = uri_interpret::parse("http:\\\\a@b@Evil.COM.:80/x/../admin")?;
//! assert_eq!(uri.username(), "b");
//! assert_eq!(uri.host(), "evil.com");
//! assert_eq!(uri.port(), "");
//! assert_eq!(uri.path(), "/admin");
//! assert_eq!(uri_interpret::to_string(&uri), "http://b@evil.com/admin");
//! # Ok::<(), uri_interpret::MalformedUri>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;
mod log;

// Internal modules (not public API)
mod checkers;
mod components;
mod error;
mod helpers;
mod normalizer;
mod parser;
mod path;
mod scheme;
mod serializer;
mod types;
mod unicode;

// Public API
pub use components::UriComponents;
pub use error::{MalformedUri, Result};
pub use scheme::{dispatch, get_scheme_type};
pub use types::{Handler, SchemeType};

/// Parse a URI string into normalized components.
///
/// # Errors
///
/// Returns [`MalformedUri::InvalidScheme`] when the input does not start with
/// ASCII letters followed by `:`, and [`MalformedUri::ExpectedAuthoritySlashes`]
/// when a hierarchical scheme is followed by fewer than two `/` and no `\`.
pub fn parse(input: &str) -> Result<UriComponents> {
    parser::parse_uri(input)
}

/// Serialize components to their canonical string form.
///
/// The output is not guaranteed to equal the original input, but parsing it
/// again yields the same components.
pub fn to_string(components: &UriComponents) -> compat::String {
    serializer::serialize(components)
}
