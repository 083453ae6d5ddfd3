use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Address-looking substrings: a URL scheme followed by a whitespace-free run.
pub struct Address;

impl Address {
    pub const PATTERN: &'static str = r"https?://\S+";

    fn regex() -> &'static Regex {
        static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();
        ADDRESS_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid address regex"))
    }

    /// Returns true if `text` contains at least one address.
    pub fn is_present(text: &str) -> bool {
        Self::regex().is_match(text)
    }

    /// Removes every address from `text`, leaving surrounding text untouched.
    pub fn strip(text: &str) -> Cow<'_, str> {
        Self::regex().replace_all(text, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_embedded_addresses() {
        assert_eq!(
            Address::strip("see https://a.example/x?y=1 and http://b.test"),
            "see  and "
        );
    }

    #[test]
    fn leaves_plain_text_borrowed() {
        assert!(matches!(Address::strip("no links here"), Cow::Borrowed(_)));
    }

    #[test]
    fn detects_addresses() {
        assert!(Address::is_present("(https://a.example)"));
        assert!(!Address::is_present("https:// nothing"));
        assert!(!Address::is_present("ftp://a.example"));
    }
}
