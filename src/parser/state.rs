/// Parser state machine states.
///
/// Hierarchical URIs walk `ScanningScheme` → `ConsumingSeparators` →
/// `ParsingAuthority` → `ParsingPath` → (`ParsingQuery`) → (`ParsingFragment`)
/// → `Done`. Opaque URIs walk `ScanningScheme` → `CapturingOpaque` → `Done`.
/// Any failure exits immediately from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Leading scheme token and its colon
    ScanningScheme,
    /// Run of '/' and '\' after the scheme
    ConsumingSeparators,
    /// Userinfo, host and port
    ParsingAuthority,
    /// Path up to '?', '#' or end of input
    ParsingPath,
    /// Query up to '#' or end of input
    ParsingQuery,
    /// Remainder after '#'
    ParsingFragment,
    /// Remainder after the scheme colon, for opaque schemes
    CapturingOpaque,
    /// Terminal state
    Done,
}
