//! Character-indexed view of the input
//!
//! Segmentation positions are counted in characters. This view maps a
//! character offset to its byte offset so that every slice of the input
//! lands on a character boundary.

use super::delimiter::is_delimiter;

/// Input text with a character to byte offset table
#[derive(Debug, Clone)]
pub struct CharIndexedText<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of each character, plus `text.len()` at the end
    c2b: Vec<usize>,
}

impl<'a> CharIndexedText<'a> {
    /// Index `text` by character
    pub fn new(text: &'a str) -> Self {
        let char_count = text.chars().count();
        let mut chars = Vec::with_capacity(char_count);
        let mut c2b = Vec::with_capacity(char_count + 1);
        for (bi, ch) in text.char_indices() {
            chars.push(ch);
            c2b.push(bi);
        }
        c2b.push(text.len());
        Self { text, chars, c2b }
    }

    /// Number of characters
    #[inline(always)]
    pub fn len_char(&self) -> usize {
        self.chars.len()
    }

    /// Whether the text is empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at character offset `pos`
    #[inline(always)]
    pub fn char_at(&self, pos: usize) -> char {
        self.chars[pos]
    }

    /// Substring between character offsets `start..end`
    #[inline(always)]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.c2b[start]..self.c2b[end]]
    }

    /// Offset of the first delimiter at or after `pos`, or the end of text
    pub fn next_delimiter(&self, pos: usize) -> usize {
        self.chars[pos..]
            .iter()
            .position(|&ch| is_delimiter(ch))
            .map_or(self.len_char(), |i| pos + i)
    }

    /// Offset just past the run of delimiters starting at `pos`
    pub fn delimiter_run_end(&self, pos: usize) -> usize {
        self.chars[pos..]
            .iter()
            .position(|&ch| !is_delimiter(ch))
            .map_or(self.len_char(), |i| pos + i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_on_multibyte() {
        let text = CharIndexedText::new("パンを食べる");
        assert_eq!(text.len_char(), 6);
        assert_eq!(text.slice(0, 2), "パン");
        assert_eq!(text.slice(2, 3), "を");
        assert_eq!(text.slice(3, 6), "食べる");
        assert_eq!(text.slice(6, 6), "");
    }

    #[test]
    fn test_mixed_widths() {
        let text = CharIndexedText::new("a😀é");
        assert_eq!(text.len_char(), 3);
        assert_eq!(text.slice(1, 2), "😀");
        assert_eq!(text.slice(2, 3), "é");
    }

    #[test]
    fn test_next_delimiter() {
        let text = CharIndexedText::new("これは「本」。");
        assert_eq!(text.next_delimiter(0), 3);
        assert_eq!(text.next_delimiter(3), 3);
        assert_eq!(text.next_delimiter(4), 5);

        let plain = CharIndexedText::new("latin");
        assert_eq!(plain.next_delimiter(0), 5);
    }

    #[test]
    fn test_delimiter_run_end() {
        let text = CharIndexedText::new("本」。「次");
        assert_eq!(text.delimiter_run_end(1), 4);
        let tail = CharIndexedText::new("本。！");
        assert_eq!(tail.delimiter_run_end(1), 3);
    }

    #[test]
    fn test_tables_sized_by_characters() {
        let text = "あ".repeat(1_000);
        let input = CharIndexedText::new(&text);
        assert_eq!(input.len_char(), 1_000);
        assert!(input.chars.capacity() < text.len());
        assert!(input.c2b.capacity() < text.len());
        assert_eq!(input.c2b.last(), Some(&text.len()));
    }

    #[test]
    fn test_empty() {
        let text = CharIndexedText::new("");
        assert!(text.is_empty());
        assert_eq!(text.len_char(), 0);
    }
}
