/// Extracts the value of the field named `key` from a
/// semicolon-delimited `key value; key value; ...` line, returning it
/// as a subslice of `line`.  This function does not allocate.
///
/// `key` matches only as a whole token: the occurrence must be at the
/// start of `line` or preceded by a space or `;`, and must be followed
/// by exactly one space.  The value runs from after that space to the
/// next `;` or the end of `line`.  The first validated occurrence
/// wins.  Comparison is case-sensitive and byte-wise.
///
/// Returns `None` if no occurrence of `key` passes the boundary
/// checks.  A matched field whose value region is empty (a `;` right
/// after the space) yields `Some("")`.
///
/// ```
/// use fieldext::extract;
///
/// let line = "x 123; y 456; lux 0.50;";
///
/// assert_eq!(Some("123"), extract("x", line));
/// assert_eq!(Some("0.50"), extract("lux", line));
/// assert_eq!(None, extract("pitch", line));
/// ```
///
/// A key that only appears inside a longer token does not match:
///
/// ```
/// use fieldext::extract;
///
/// assert_eq!(None, extract("x", "xray 1;"));
/// ```
///
/// # Panics
///
/// Panics if `key` is empty.
pub fn extract<'a>(key: &str, line: &'a str) -> Option<&'a str> {
    assert!(!key.is_empty(), "key must not be empty");

    let needle = key.as_bytes();
    let data = line.as_bytes();
    let mut pos = 0;

    while let Some(p) = find_from(data, pos, needle) {
        if p != 0 && data[p - 1] != b' ' && data[p - 1] != b';' {
            pos = p + 1;
            continue;
        }

        let after = p + needle.len();

        if after == data.len() || data[after] != b' ' {
            pos = p + 1;
            continue;
        }

        let start = after + 1;
        let end = match data[start..].iter().position(|&x| x == b';') {
            Some(pos) => start + pos,
            None => data.len(),
        };

        return Some(&line[start..end]);
    }

    None
}

/// Extracts the value of the field named `key` from `line` into the
/// caller supplied buffer `out`, and returns whether the field was
/// found.  This is the fixed-capacity counterpart of [extract] for
/// callers that must not allocate, e.g. when the buffer is handed to
/// C firmware code.
///
/// On a match the value bytes are copied into `out`, truncated to
/// `out.len() - 1` bytes if they do not fit, and a NUL byte is written
/// right after the copied content.  Truncation is silent; the return
/// value is `true` either way.  If the field is not found, `out`
/// holds an empty NUL terminated string and `false` is returned.
///
/// `out` always holds a valid NUL terminated string after the call,
/// with at most `out.len() - 1` content bytes.
///
/// ```
/// use fieldext::extract_into;
///
/// let mut buf = [0u8; 64];
///
/// assert!(extract_into("roll", "lux 0.50; roll 1.20;", &mut buf));
/// assert_eq!(b"1.20\0", &buf[..5]);
/// ```
///
/// ```
/// use fieldext::extract_into;
///
/// let mut buf = [0u8; 3];
///
/// assert!(extract_into("x", "x 123;", &mut buf));
/// assert_eq!(b"12\0", &buf[..]);
/// ```
///
/// # Panics
///
/// Panics if `key` is empty or `out` is empty.  A zero length buffer
/// cannot hold the terminating NUL.
pub fn extract_into(key: &str, line: &str, out: &mut [u8]) -> bool {
    assert!(!out.is_empty(), "out must have room for the terminating NUL");

    match extract(key, line) {
        Some(v) => {
            let n = std::cmp::min(v.len(), out.len() - 1);

            out[..n].copy_from_slice(&v.as_bytes()[..n]);
            out[n] = 0;

            true
        }
        None => {
            out[0] = 0;

            false
        }
    }
}

fn find_from(data: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if from >= data.len() {
        return None;
    }

    data[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|pos| from + pos)
}
