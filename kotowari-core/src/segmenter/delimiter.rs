//! Delimiter characters
//!
//! Sentence-final marks and quotation brackets. Delimiters are never
//! looked up; consecutive delimiters form a single unmatched word.
//! - 。 (U+3002) - Ideographic full stop
//! - ！ (U+FF01) / ？ (U+FF1F) - Full-width exclamation and question marks
//! - 「」 (U+300C/U+300D) - Corner brackets
//! - 『』 (U+300E/U+300F) - White corner brackets

/// The fixed delimiter set
pub const DELIMITERS: [char; 7] = ['。', '！', '？', '「', '」', '『', '』'];

/// Whether `ch` is a delimiter
#[inline]
pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiters() {
        for ch in DELIMITERS {
            assert!(is_delimiter(ch), "{ch} should be a delimiter");
        }
        // Japanese comma separates phrases, not sentences
        assert!(!is_delimiter('、'));
        assert!(!is_delimiter('.'));
        assert!(!is_delimiter('パ'));
    }
}
