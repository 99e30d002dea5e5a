/// Returns an iterator over the `(key, value)` pairs of a
/// semicolon-delimited `key value; key value; ...` line.
///
/// ```
/// use fieldext::fields;
///
/// for (k, v) in fields("lux 0.50; roll 1.20;") {
///     println!("{k} = {v}");
/// }
/// ```
pub fn fields(line: &str) -> Fields {
    Fields { line, pos: 0 }
}

/// Iterator over the fields of a semicolon-delimited line, created by
/// [fields].  It walks the `;` separated segments left to right and
/// splits each one at its first space into a key and a value, both
/// borrowed from the input.  It does not allocate.
///
/// Segments that are empty, all spaces, or have no space after the
/// key are skipped, the same way [crate::extract()] rejects a key with
/// no trailing space.  Keys are not checked for uniqueness.
///
/// ```
/// use fieldext::fields;
///
/// let mut it = fields("x 123; y 456");
///
/// assert_eq!(Some(("x", "123")), it.next());
/// assert_eq!(Some(("y", "456")), it.next());
/// assert_eq!(None, it.next());
/// ```
pub struct Fields<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Iterator for Fields<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.line.as_bytes();

        while self.pos < data.len() {
            let start = self.pos;
            let end = match data[start..].iter().position(|&x| x == b';') {
                Some(pos) => start + pos,
                None => data.len(),
            };

            self.pos = end + 1;

            let key_start = match data[start..end].iter().position(|&x| x != b' ') {
                Some(pos) => start + pos,
                None => continue,
            };

            let Some(sp) = data[key_start..end].iter().position(|&x| x == b' ') else {
                continue;
            };

            let key_end = key_start + sp;

            return Some((&self.line[key_start..key_end], &self.line[key_end + 1..end]));
        }

        None
    }
}
