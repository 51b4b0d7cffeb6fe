//! Character normalization applied before mapping.

/// Distance between a katakana and the matching hiragana code point.
const KATAKANA_OFFSET: u32 = 0x60;

/// Converts katakana in `text` to hiragana, leaving everything else as is.
///
/// Only U+30A1 (ァ) through U+30F6 (ヶ) are shifted; the long-vowel mark ー
/// and katakana-only symbols are kept.
///
/// # Example
///
/// ```rust
/// use tenji_cells::katakana_to_hiragana;
///
/// assert_eq!(katakana_to_hiragana("トウキョウ"), "とうきょう");
/// assert_eq!(katakana_to_hiragana("ラーメン1"), "らーめん1");
/// ```
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{30A1}'..='\u{30F6}' => {
                char::from_u32(u32::from(c) - KATAKANA_OFFSET).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Folds a full-width ASCII variant (U+FF01..=U+FF5E) to its ASCII form.
///
/// Japanese text commonly writes digits and Latin letters full width.
///
/// ```rust
/// use tenji_cells::kana::fold_width;
///
/// assert_eq!(fold_width('１'), '1');
/// assert_eq!(fold_width('Ａ'), 'A');
/// assert_eq!(fold_width('あ'), 'あ');
/// ```
pub fn fold_width(c: char) -> char {
    match c {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(u32::from(c) - 0xFEE0).unwrap_or(c),
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_kana_are_shifted() {
        assert_eq!(katakana_to_hiragana("ァッャ"), "ぁっゃ");
    }

    #[test]
    fn test_block_edges() {
        assert_eq!(katakana_to_hiragana("\u{30A0}"), "\u{30A0}");
        assert_eq!(katakana_to_hiragana("ヶ"), "ゖ");
        assert_eq!(katakana_to_hiragana("ヷ"), "ヷ");
    }

    #[test]
    fn test_hiragana_is_untouched() {
        assert_eq!(katakana_to_hiragana("ひらがな"), "ひらがな");
    }
}
