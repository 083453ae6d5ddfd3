/// A single trimmed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Zero-based line number in the source text.
    pub index: usize,
    /// Line text with surrounding whitespace (and any `\r`) removed.
    pub text: &'a str,
}

/// Returns an iterator over the trimmed lines of `content`.
///
/// Handles both `\n` and `\r\n` endings. A trailing newline does not
/// produce an extra empty line.
pub fn lines(content: &str) -> impl Iterator<Item = Line<'_>> {
    content.lines().enumerate().map(|(index, raw)| Line {
        index,
        text: raw.trim(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_trimmed_and_numbered() {
        let got: Vec<_> = lines("  a \n\tb\n").collect();
        assert_eq!(
            got,
            vec![
                Line { index: 0, text: "a" },
                Line { index: 1, text: "b" },
            ]
        );
    }

    #[test]
    fn crlf_endings() {
        let got: Vec<_> = lines("a\r\nb\r\n").map(|l| l.text).collect();
        assert_eq!(got, vec!["a", "b"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        let got: Vec<_> = lines("a\n\n   \nb").map(|l| l.text).collect();
        assert_eq!(got, vec!["a", "", "", "b"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(lines("").count(), 0);
    }
}
