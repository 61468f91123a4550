/// Byte offset of the end of the authority starting at `start`:
/// the first '/', '?' or '#', or the end of input.
pub fn find_authority_end(bytes: &[u8], start: usize) -> usize {
    memchr::memchr3(b'/', b'?', b'#', &bytes[start..]).map_or(bytes.len(), |pos| start + pos)
}

/// Byte offset of the end of the path starting at `start`:
/// the first '?' or '#', or the end of input.
pub fn find_path_end(bytes: &[u8], start: usize) -> usize {
    memchr::memchr2(b'?', b'#', &bytes[start..]).map_or(bytes.len(), |pos| start + pos)
}

/// Byte offset of the end of the query starting at `start`:
/// the first '#', or the end of input.
pub fn find_query_end(bytes: &[u8], start: usize) -> usize {
    memchr::memchr(b'#', &bytes[start..]).map_or(bytes.len(), |pos| start + pos)
}

/// Count the run of '/' and '\' separators at `start`.
/// Returns the run length and whether any '\' was seen.
pub fn count_separators(bytes: &[u8], start: usize) -> (usize, bool) {
    let mut count = 0;
    let mut backslash = false;
    for &b in &bytes[start..] {
        match b {
            b'/' => {}
            b'\\' => backslash = true,
            _ => break,
        }
        count += 1;
    }
    (count, backslash)
}
