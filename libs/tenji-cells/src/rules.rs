//! # Mapping Tables
//!
//! Fixed tables from characters to dot patterns, and the mora rules that
//! expand one or two kana into an indicator cell plus a base cell.

use crate::dots::{
    DotVector, DAKUTEN, HANDAKUTEN, SPACE, YOON, YOON_DAKUTEN, YOON_HANDAKUTEN,
};

const fn d(dots: &[u8]) -> DotVector {
    DotVector::with_dots(dots)
}

/// Class of a mora rule. Each class is written as one fixed indicator cell
/// followed by the cell of the rule's base kana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleClass {
    /// Voiced kana such as が (か + dakuten).
    Daku,
    /// Semi-voiced kana such as ぱ (は + handakuten).
    Handaku,
    /// Contracted sound such as きゃ.
    Yoon,
    /// Voiced contracted sound such as ぎゃ.
    YoonDaku,
    /// Semi-voiced contracted sound such as ぴゃ.
    YoonHandaku,
}

impl RuleClass {
    /// Indicator pattern written before the base cell.
    pub const fn indicator(self) -> DotVector {
        match self {
            RuleClass::Daku => DAKUTEN,
            RuleClass::Handaku => HANDAKUTEN,
            RuleClass::Yoon => YOON,
            RuleClass::YoonDaku => YOON_DAKUTEN,
            RuleClass::YoonHandaku => YOON_HANDAKUTEN,
        }
    }

    /// Display glyph of the indicator cell.
    pub const fn glyph(self) -> &'static str {
        match self {
            RuleClass::Daku => "゛",
            RuleClass::Handaku => "゜",
            RuleClass::Yoon => "拗",
            RuleClass::YoonDaku => "拗゛",
            RuleClass::YoonHandaku => "拗゜",
        }
    }
}

/// A matched mora rule: its class and the kana whose cell follows the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoraRule {
    pub class: RuleClass,
    pub base: char,
}

/// Looks up a contracted sound (yōon) spelled with two characters.
///
/// The first kana selects the consonant row, the small ゃ/ゅ/ょ selects the
/// a/u/o column of that row.
///
/// # Example
///
/// ```rust
/// use tenji_cells::rules::{compound_rule, RuleClass};
///
/// let rule = compound_rule('き', 'ゃ').unwrap();
/// assert_eq!(rule.class, RuleClass::Yoon);
/// assert_eq!(rule.base, 'か');
/// assert!(compound_rule('き', 'や').is_none());
/// ```
pub fn compound_rule(first: char, second: char) -> Option<MoraRule> {
    let column = match second {
        'ゃ' => 0,
        'ゅ' => 1,
        'ょ' => 2,
        _ => return None,
    };
    let (class, row) = match first {
        'き' => (RuleClass::Yoon, ['か', 'く', 'こ']),
        'し' => (RuleClass::Yoon, ['さ', 'す', 'そ']),
        'ち' => (RuleClass::Yoon, ['た', 'つ', 'と']),
        'に' => (RuleClass::Yoon, ['な', 'ぬ', 'の']),
        'ひ' => (RuleClass::Yoon, ['は', 'ふ', 'ほ']),
        'み' => (RuleClass::Yoon, ['ま', 'む', 'も']),
        'り' => (RuleClass::Yoon, ['ら', 'る', 'ろ']),
        'ぎ' => (RuleClass::YoonDaku, ['か', 'く', 'こ']),
        'じ' => (RuleClass::YoonDaku, ['さ', 'す', 'そ']),
        'ぢ' => (RuleClass::YoonDaku, ['た', 'つ', 'と']),
        'び' => (RuleClass::YoonDaku, ['は', 'ふ', 'ほ']),
        'ぴ' => (RuleClass::YoonHandaku, ['は', 'ふ', 'ほ']),
        _ => return None,
    };
    Some(MoraRule {
        class,
        base: row[column],
    })
}

/// Looks up a voiced or semi-voiced kana.
///
/// # Example
///
/// ```rust
/// use tenji_cells::rules::{simple_rule, RuleClass};
///
/// let rule = simple_rule('ぽ').unwrap();
/// assert_eq!(rule.class, RuleClass::Handaku);
/// assert_eq!(rule.base, 'ほ');
/// ```
pub fn simple_rule(c: char) -> Option<MoraRule> {
    let (class, base) = match c {
        'が' => (RuleClass::Daku, 'か'),
        'ぎ' => (RuleClass::Daku, 'き'),
        'ぐ' => (RuleClass::Daku, 'く'),
        'げ' => (RuleClass::Daku, 'け'),
        'ご' => (RuleClass::Daku, 'こ'),
        'ざ' => (RuleClass::Daku, 'さ'),
        'じ' => (RuleClass::Daku, 'し'),
        'ず' => (RuleClass::Daku, 'す'),
        'ぜ' => (RuleClass::Daku, 'せ'),
        'ぞ' => (RuleClass::Daku, 'そ'),
        'だ' => (RuleClass::Daku, 'た'),
        'ぢ' => (RuleClass::Daku, 'ち'),
        'づ' => (RuleClass::Daku, 'つ'),
        'で' => (RuleClass::Daku, 'て'),
        'ど' => (RuleClass::Daku, 'と'),
        'ば' => (RuleClass::Daku, 'は'),
        'び' => (RuleClass::Daku, 'ひ'),
        'ぶ' => (RuleClass::Daku, 'ふ'),
        'べ' => (RuleClass::Daku, 'へ'),
        'ぼ' => (RuleClass::Daku, 'ほ'),
        'ぱ' => (RuleClass::Handaku, 'は'),
        'ぴ' => (RuleClass::Handaku, 'ひ'),
        'ぷ' => (RuleClass::Handaku, 'ふ'),
        'ぺ' => (RuleClass::Handaku, 'へ'),
        'ぽ' => (RuleClass::Handaku, 'ほ'),
        _ => return None,
    };
    Some(MoraRule { class, base })
}

/// Cell pattern of an ASCII digit.
pub fn digit_dots(c: char) -> Option<DotVector> {
    let dots = match c {
        '1' => d(&[1]),
        '2' => d(&[1, 2]),
        '3' => d(&[1, 4]),
        '4' => d(&[1, 4, 5]),
        '5' => d(&[1, 5]),
        '6' => d(&[1, 2, 4]),
        '7' => d(&[1, 2, 4, 5]),
        '8' => d(&[1, 2, 5]),
        '9' => d(&[2, 4]),
        '0' => d(&[2, 4, 5]),
        _ => return None,
    };
    Some(dots)
}

/// Cell pattern of a lower-case ASCII letter.
pub fn letter_dots(c: char) -> Option<DotVector> {
    let dots = match c {
        'a' => d(&[1]),
        'b' => d(&[1, 2]),
        'c' => d(&[1, 4]),
        'd' => d(&[1, 4, 5]),
        'e' => d(&[1, 5]),
        'f' => d(&[1, 2, 4]),
        'g' => d(&[1, 2, 4, 5]),
        'h' => d(&[1, 2, 5]),
        'i' => d(&[2, 4]),
        'j' => d(&[2, 4, 5]),
        'k' => d(&[1, 3]),
        'l' => d(&[1, 2, 3]),
        'm' => d(&[1, 3, 4]),
        'n' => d(&[1, 3, 4, 5]),
        'o' => d(&[1, 3, 5]),
        'p' => d(&[1, 2, 3, 4]),
        'q' => d(&[1, 2, 3, 4, 5]),
        'r' => d(&[1, 2, 3, 5]),
        's' => d(&[2, 3, 4]),
        't' => d(&[2, 3, 4, 5]),
        'u' => d(&[1, 3, 6]),
        'v' => d(&[1, 2, 3, 6]),
        'w' => d(&[2, 4, 5, 6]),
        'x' => d(&[1, 3, 4, 6]),
        'y' => d(&[1, 3, 4, 5, 6]),
        'z' => d(&[1, 3, 5, 6]),
        _ => return None,
    };
    Some(dots)
}

/// Cell pattern of a plain kana or punctuation mark.
///
/// Covers the unvoiced hiragana, small っ, the long-vowel mark ー, the
/// Japanese comma and full stop, and the ASCII space.
pub fn kana_dots(c: char) -> Option<DotVector> {
    let dots = match c {
        'あ' => d(&[1]),
        'い' => d(&[1, 2]),
        'う' => d(&[1, 4]),
        'え' => d(&[1, 2, 4]),
        'お' => d(&[2, 4]),
        'か' => d(&[1, 6]),
        'き' => d(&[1, 2, 6]),
        'く' => d(&[1, 4, 6]),
        'け' => d(&[1, 2, 4, 6]),
        'こ' => d(&[2, 4, 6]),
        'さ' => d(&[1, 5, 6]),
        'し' => d(&[1, 2, 5, 6]),
        'す' => d(&[1, 4, 5, 6]),
        'せ' => d(&[1, 2, 4, 5, 6]),
        'そ' => d(&[2, 4, 5, 6]),
        'た' => d(&[1, 3, 5]),
        'ち' => d(&[1, 2, 3, 5]),
        'つ' => d(&[1, 3, 4, 5]),
        'て' => d(&[1, 2, 3, 4, 5]),
        'と' => d(&[2, 3, 4, 5]),
        'な' => d(&[1, 3]),
        'に' => d(&[1, 2, 3]),
        'ぬ' => d(&[1, 3, 4]),
        'ね' => d(&[1, 2, 3, 4]),
        'の' => d(&[2, 3, 4]),
        'は' => d(&[1, 3, 6]),
        'ひ' => d(&[1, 2, 3, 6]),
        'ふ' => d(&[1, 3, 4, 6]),
        'へ' => d(&[1, 2, 3, 4, 6]),
        'ほ' => d(&[2, 3, 4, 6]),
        'ま' => d(&[1, 3, 5, 6]),
        'み' => d(&[1, 2, 3, 5, 6]),
        'む' => d(&[1, 3, 4, 5, 6]),
        'め' => d(&[1, 2, 3, 4, 5, 6]),
        'も' => d(&[2, 3, 4, 5, 6]),
        'や' => d(&[3, 4]),
        'ゆ' => d(&[3, 4, 6]),
        'よ' => d(&[3, 4, 5]),
        'ら' => d(&[1, 5]),
        'り' => d(&[1, 2, 5]),
        'る' => d(&[1, 4, 5]),
        'れ' => d(&[1, 2, 4, 5]),
        'ろ' => d(&[2, 4, 5]),
        'わ' => d(&[3]),
        'を' => d(&[3, 4, 5]),
        'ん' => d(&[3, 5, 6]),
        'っ' => d(&[2]),
        'ー' => d(&[2, 5]),
        '、' => d(&[5]),
        '。' => d(&[2, 5, 6]),
        ' ' => SPACE,
        _ => return None,
    };
    Some(dots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_base_is_a_plain_kana() {
        let voiced = "がぎぐげござじずぜぞだぢづでどばびぶべぼぱぴぷぺぽ";
        for c in voiced.chars() {
            let rule = simple_rule(c).unwrap();
            assert!(kana_dots(rule.base).is_some(), "{c} -> {}", rule.base);
        }
        for first in "きしちにひみりぎじぢびぴ".chars() {
            for second in "ゃゅょ".chars() {
                let rule = compound_rule(first, second).unwrap();
                assert!(kana_dots(rule.base).is_some());
            }
        }
    }

    #[test]
    fn test_compound_rule_count() {
        let mut count = 0;
        for first in 'ぁ'..='ゖ' {
            for second in 'ぁ'..='ゖ' {
                if compound_rule(first, second).is_some() {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 36);
    }

    #[test]
    fn test_yoon_classes() {
        assert_eq!(compound_rule('じ', 'ょ').unwrap().class, RuleClass::YoonDaku);
        assert_eq!(compound_rule('じ', 'ょ').unwrap().base, 'そ');
        assert_eq!(compound_rule('ぴ', 'ゅ').unwrap().class, RuleClass::YoonHandaku);
        assert_eq!(compound_rule('ぴ', 'ゅ').unwrap().base, 'ふ');
    }

    #[test]
    fn test_rule_indicators_are_distinct_indicators() {
        let classes = [
            RuleClass::Daku,
            RuleClass::Handaku,
            RuleClass::Yoon,
            RuleClass::YoonDaku,
            RuleClass::YoonHandaku,
        ];
        for (i, a) in classes.iter().enumerate() {
            assert!(a.indicator().is_indicator());
            for b in &classes[i + 1..] {
                assert_ne!(a.indicator(), b.indicator());
            }
        }
    }

    #[test]
    fn test_digits_share_patterns_with_first_letters() {
        for (digit, letter) in "1234567890".chars().zip("abcdefghij".chars()) {
            assert_eq!(digit_dots(digit), letter_dots(letter));
        }
    }

    #[test]
    fn test_upper_case_is_not_in_letter_table() {
        assert!(letter_dots('A').is_none());
    }
}
