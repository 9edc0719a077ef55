//! Character-level Unicode classification for name text.
//!
//! All predicates go through the Unicode script and general-category
//! databases rather than hand-rolled code-point ranges, so Han variants
//! beyond the CJK Unified Ideographs block (Extension A, compatibility
//! ideographs, etc.) are classified the same way the platform text
//! stack classifies them.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};
use unicode_script::{Script, UnicodeScript};

/// Returns true if the character belongs to the Han script (kanji/hanzi).
///
/// # Example
/// ```
/// use meibo::name_index::scripts::is_han;
///
/// assert!(is_han('田'));
/// assert!(is_han('漢'));
/// assert!(!is_han('た'));
/// assert!(!is_han('T'));
/// ```
pub fn is_han(c: char) -> bool {
    c.script() == Script::Han
}

/// Returns true if the character is hiragana.
pub fn is_hiragana(c: char) -> bool {
    c.script() == Script::Hiragana
}

/// Returns true if the character is katakana.
pub fn is_katakana(c: char) -> bool {
    c.script() == Script::Katakana
}

/// Returns true if the character is Han, hiragana or katakana.
///
/// Used by the transliteration adapter to short-circuit on text that
/// contains no Japanese letters at all.
pub fn is_japanese_letter(c: char) -> bool {
    matches!(
        c.script(),
        Script::Han | Script::Hiragana | Script::Katakana
    )
}

/// Returns true if the character is a decimal digit (general category Nd).
///
/// This is the full Unicode Decimal_Number test, so fullwidth digits
/// like '１' match alongside ASCII '1'.
pub fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Returns true if the character is in the Symbol general-category
/// group (Sm, Sc, Sk, So).
///
/// Note that ASCII punctuation such as '!' or '?' is in the
/// Punctuation group, not Symbol, and therefore does NOT match. The
/// nickname classification relies on this distinction.
///
/// # Example
/// ```
/// use meibo::name_index::scripts::is_symbol;
///
/// assert!(is_symbol('+'));  // Sm
/// assert!(is_symbol('$'));  // Sc
/// assert!(is_symbol('©'));  // So
/// assert!(!is_symbol('!')); // Po, punctuation
/// ```
pub fn is_symbol(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Symbol
}
