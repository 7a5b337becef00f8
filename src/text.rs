//! Text folding shared by matching code.

use unicode_normalization::UnicodeNormalization;

/// Fold user-visible text for matching: trim, NFC-normalize, lowercase.
/// Composed and decomposed input ("café" typed either way) fold to the
/// same string.
pub fn fold(text: &str) -> String {
    text.trim().nfc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::fold;

    #[test]
    fn folds_case_and_whitespace() {
        assert_eq!(fold("  Doheny Library "), "doheny library");
    }

    #[test]
    fn folds_decomposed_input() {
        // "é" as 'e' + combining acute vs the precomposed code point.
        assert_eq!(fold("Cafe\u{301}"), fold("Caf\u{e9}"));
    }
}
