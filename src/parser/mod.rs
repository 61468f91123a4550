mod authority;
mod builder;
mod hierarchical;
mod opaque;
mod state;

use builder::UriBuilder;
use state::State;

use crate::components::UriComponents;
use crate::error::Result;
use crate::log::trace;
use crate::normalizer::normalize;
use crate::scheme::scan_scheme;
use crate::types::Handler;

/// Parse a URI string into normalized components.
///
/// Surrounding whitespace is trimmed first. A single forward cursor walks the
/// input; each state hands it to the next and no state moves it backwards.
///
/// # Errors
///
/// Returns an error if the scheme is missing or invalid, or if a hierarchical
/// scheme is not followed by `//` (or by any run containing `\`).
pub fn parse_uri(input: &str) -> Result<UriComponents> {
    let input = input.trim();
    let mut builder = UriBuilder::default();
    let mut state = State::ScanningScheme;
    let mut pointer = 0;

    loop {
        trace!("{state:?} at byte {pointer}");

        state = match state {
            State::ScanningScheme => {
                let (scheme, consumed) = scan_scheme(&input[pointer..])?;
                builder.set_scheme(scheme);
                pointer += consumed;
                match builder.scheme_type().handler() {
                    Handler::Hierarchical => State::ConsumingSeparators,
                    Handler::Opaque => State::CapturingOpaque,
                }
            }
            State::ConsumingSeparators => {
                pointer = hierarchical::consume_separators(input, pointer)?;
                State::ParsingAuthority
            }
            State::ParsingAuthority => {
                pointer = authority::parse_authority(input, pointer, &mut builder);
                State::ParsingPath
            }
            State::ParsingPath => {
                pointer = hierarchical::parse_path(input, pointer, &mut builder);
                after_path(input.as_bytes().get(pointer))
            }
            State::ParsingQuery => {
                pointer = hierarchical::parse_query(input, pointer, &mut builder);
                after_path(input.as_bytes().get(pointer))
            }
            State::ParsingFragment => {
                hierarchical::parse_fragment(input, pointer, &mut builder);
                State::Done
            }
            State::CapturingOpaque => {
                opaque::capture_opaque(input, pointer, &mut builder);
                State::Done
            }
            State::Done => break,
        };
    }

    normalize(builder.components_mut());
    Ok(builder.build())
}

/// Next state from the delimiter under the cursor
fn after_path(delimiter: Option<&u8>) -> State {
    match delimiter {
        Some(b'?') => State::ParsingQuery,
        Some(b'#') => State::ParsingFragment,
        _ => State::Done,
    }
}
