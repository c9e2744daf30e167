//! Katakana and hiragana conversion
//!
//! The two scripts are laid out in parallel in Unicode, 0x60 apart.
//! Characters outside the convertible ranges are returned unchanged.

const SCRIPT_OFFSET: u32 = 0x60;

/// Convert one katakana character (ァ..=ヶ) to hiragana
pub fn kata_to_hira_char(ch: char) -> char {
    if ('ァ'..='ヶ').contains(&ch) {
        char::from_u32(ch as u32 - SCRIPT_OFFSET).unwrap_or(ch)
    } else {
        ch
    }
}

/// Convert one hiragana character (ぁ..=ゖ) to katakana
pub fn hira_to_kata_char(ch: char) -> char {
    if ('ぁ'..='ゖ').contains(&ch) {
        char::from_u32(ch as u32 + SCRIPT_OFFSET).unwrap_or(ch)
    } else {
        ch
    }
}

/// Convert all katakana in `text` to hiragana
pub fn kata_to_hira(text: &str) -> String {
    text.chars().map(kata_to_hira_char).collect()
}

/// Convert all hiragana in `text` to katakana
pub fn hira_to_kata(text: &str) -> String {
    text.chars().map(hira_to_kata_char).collect()
}

/// Whether `text` contains any katakana that [`kata_to_hira`] would change
pub fn has_katakana(text: &str) -> bool {
    text.chars().any(|ch| ('ァ'..='ヶ').contains(&ch))
}
