use crate::parsing::inline::kinds::Address;

/// Inline citation footers such as `Source: https://…` or `出典: https://…`.
///
/// Citations are attached structurally by the matcher, so footer lines in
/// the text are suppressed.
pub struct CitationFooter;

impl CitationFooter {
    pub const DEFAULT_KEYWORDS: [&'static str; 4] = ["source", "ソース", "出典", "参考"];

    /// True if the line mentions one of `keywords` (case-insensitive) and
    /// carries an address.
    pub fn is_match(line: &str, keywords: &[String]) -> bool {
        if !Address::is_present(line) {
            return false;
        }
        let lower = line.to_lowercase();
        keywords
            .iter()
            .any(|k| !k.is_empty() && lower.contains(&k.to_lowercase()))
    }
}
