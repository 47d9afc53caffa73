pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;

    fn name(&self) -> &str;
}

/// Splits content on the literal space character, and nothing else.
///
/// Consecutive, leading, or trailing spaces produce empty fragments which are
/// dropped. Tabs and newlines are ordinary content bytes, not separators, and
/// no case folding is applied. Empty content yields no tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceTokenizer;

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(' ')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn name(&self) -> &str {
        "space"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_single_spaces() {
        let tokens = SpaceTokenizer.tokenize("hello brave new world");
        assert_eq!(tokens, vec!["hello", "brave", "new", "world"]);
    }

    #[test]
    fn drops_empty_fragments() {
        let tokens = SpaceTokenizer.tokenize("  a   b ");
        assert_eq!(tokens, vec!["a", "b"]);
    }

    #[test]
    fn empty_content_yields_no_tokens() {
        assert!(SpaceTokenizer.tokenize("").is_empty());
        assert!(SpaceTokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn other_whitespace_is_not_a_separator() {
        let tokens = SpaceTokenizer.tokenize("a\tb c\nd");
        assert_eq!(tokens, vec!["a\tb", "c\nd"]);
    }

    #[test]
    fn no_case_folding() {
        let tokens = SpaceTokenizer.tokenize("Hello HELLO hello");
        assert_eq!(tokens, vec!["Hello", "HELLO", "hello"]);
    }
}
