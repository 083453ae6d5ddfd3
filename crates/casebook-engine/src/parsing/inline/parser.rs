use super::{
    cursor::Cursor,
    kinds::{Address, Emphasis},
    types::{InlineSpan, InlineSpans},
};

/// Resolves one line of display text into inline spans.
///
/// Addresses are removed first. If only whitespace remains the result is
/// empty, which callers treat as "drop this line". The text is not trimmed,
/// so spacing around a removed address survives.
pub fn resolve(text: &str) -> InlineSpans {
    let stripped = Address::strip(text);
    if stripped.trim().is_empty() {
        return vec![];
    }
    parse_emphasis(&stripped)
}

/// Splits `s` on matched `**…**` pairs.
///
/// The first `**` after an opener closes it. An opener with no closer is
/// literal text. Empty fragments are omitted.
pub fn parse_emphasis(s: &str) -> InlineSpans {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut InlineSpans, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineSpan::plain(&s[start..end]));
        }
    }

    while !cur.eof() {
        let open = cur.pos();
        if let Some((inner, end)) = try_parse_emphasis(&mut cur) {
            flush_text(&mut out, s, text_start, open);
            if !inner.is_empty() {
                out.push(InlineSpan::emphasized(inner));
            }
            text_start = end;
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}

/// Attempts to parse `**inner**` at the cursor.
///
/// On success the cursor sits after the closing delimiter and the inner text
/// plus that end offset are returned. On failure the cursor is unchanged.
fn try_parse_emphasis<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, usize)> {
    if !cur.starts_with(Emphasis::DELIM.as_bytes()) {
        return None;
    }
    let s = cur.s;
    let delim = Emphasis::DELIM.len();
    let inner_start = cur.pos() + delim;
    let close = cur.find_from(inner_start, Emphasis::DELIM)?;
    let end = close + delim;
    cur.jump_to(end);
    Some((&s[inner_start..close], end))
}
