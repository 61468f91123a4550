use super::builder::UriBuilder;
use crate::error::{MalformedUri, Result};
use crate::helpers::{count_separators, find_path_end, find_query_end};
use crate::log::debug;
use crate::path::normalize_path;

/// Consume the '/' and '\' run after the scheme and return the cursor after it.
///
/// Fewer than two separators fail, unless a '\' appeared anywhere in the run:
/// a backslash switches the parse to lenient mode, the way browsers treat
/// `http:\host` as `http://host`.
pub fn consume_separators(input: &str, pointer: usize) -> Result<usize> {
    let (count, lenient) = count_separators(input.as_bytes(), pointer);

    if count < 2 {
        if !lenient {
            return Err(MalformedUri::ExpectedAuthoritySlashes);
        }
        debug!("accepting {count} separator(s) after scheme in lenient mode");
    }

    Ok(pointer + count)
}

/// Capture and normalize the path, returning the cursor at '?', '#' or end.
pub fn parse_path(input: &str, pointer: usize, builder: &mut UriBuilder) -> usize {
    let end = find_path_end(input.as_bytes(), pointer);
    builder.set_path(normalize_path(&input[pointer..end]));
    end
}

/// Capture the raw query after the '?' at `pointer`, returning the cursor at '#' or end.
pub fn parse_query(input: &str, pointer: usize, builder: &mut UriBuilder) -> usize {
    let start = pointer + 1;
    let end = find_query_end(input.as_bytes(), start);
    builder.set_query(&input[start..end]);
    end
}

/// Capture everything after the '#' at `pointer` verbatim.
pub fn parse_fragment(input: &str, pointer: usize, builder: &mut UriBuilder) {
    builder.set_fragment(&input[pointer + 1..]);
}
