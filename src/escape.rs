//! Expansion of the `\n` escape in prepend/append strings.

/// Replace every literal backslash-`n` pair in `raw` with a newline.
///
/// The scan runs left to right: a match consumes both characters, anything
/// else is copied one character at a time. A backslash that is not followed
/// by `n` (including one at the very end) is kept as-is.
#[must_use]
pub fn resolve(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(c) = rest.chars().next() {
        if let Some(tail) = rest.strip_prefix("\\n") {
            out.push('\n');
            rest = tail;
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    out
}
