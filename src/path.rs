use crate::compat::{String, Vec};

/// Normalize a hierarchical path.
///
/// Empty and `.` segments are dropped. `..` removes the previously retained
/// segment; at the root it is discarded, so the result never climbs above `/`.
/// The output always starts with `/` (which covers the leading-slash rule of
/// the network schemes) and is never empty.
pub fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    if segments.is_empty() {
        return String::from("/");
    }

    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in segments {
        normalized.push('/');
        normalized.push_str(segment);
    }
    normalized
}
