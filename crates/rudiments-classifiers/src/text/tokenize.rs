use std::sync::OnceLock;

use regex::Regex;

/// Tokens shorter than this many characters are dropped.
pub const MIN_TOKEN_LEN: usize = 3;

fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| {
        // a valid literal pattern; failure here is a programming error
        Regex::new(r"[^\p{L}\p{N}]+").expect("separator pattern compiles")
    })
}

/// Split on runs of non-alphanumeric characters, lowercase, and keep tokens
/// whose lowercased form is longer than two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    separator()
        .split(text)
        .map(str::to_lowercase)
        .filter(|tok| tok.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lowercases_and_drops_short_tokens() {
        let tokens = tokenize("This book is the best book on Python or M.L. I have ever laid eyes upon.");
        assert_eq!(
            tokens,
            vec!["this", "book", "the", "best", "book", "python", "have", "ever", "laid", "eyes", "upon"]
        );
    }

    #[test]
    fn underscores_and_punctuation_separate_tokens() {
        assert_eq!(tokenize("foo_bar--BAZ!!qux42"), vec!["foo", "bar", "baz", "qux42"]);
        assert!(tokenize("  ,. a b ").is_empty());
    }

    #[test]
    fn length_is_measured_after_lowercasing() {
        // 'İ' lowercases to two chars: "i" plus a combining dot
        assert_eq!(tokenize("İx ab"), vec!["i\u{307}x"]);
    }
}
