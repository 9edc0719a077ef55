//! Furigana transliteration adapter.
//!
//! Producing a true phonetic reading for kanji needs a linguistic
//! analysis capability (a morphological analyzer plus reading
//! dictionary) that is outside this crate. The [`Transliterate`] trait
//! models that capability as an injected dependency with a single
//! method and a narrow guaranteed contract:
//!
//! - text with no Han/Hiragana/Katakana characters comes back unchanged
//! - hiragana is rendered as katakana
//! - the reading chosen for ambiguous kanji is NOT guaranteed
//! - the adapter never fails; an absent backend returns its input

use wana_kana::ConvertJapanese;

use super::scripts::is_japanese_letter;

/// Injected transliteration capability.
pub trait Transliterate {
    /// Renders the phonetic reading of `text` in katakana, or returns
    /// `text` unchanged when it contains no Japanese letters.
    fn to_katakana(&self, text: &str) -> String;
}

/// Default kana-level transliterator backed by `wana_kana`.
///
/// Hiragana converts to katakana; kanji has no reading at this level
/// and passes through unchanged. Callers that need kanji readings
/// inject a morphological backend behind the same trait.
///
/// # Example
/// ```
/// use meibo::name_index::{KanaTransliterate, Transliterate};
///
/// let t = KanaTransliterate;
/// assert_eq!(t.to_katakana("たなか"), "タナカ");
/// assert_eq!(t.to_katakana("Tanaka"), "Tanaka");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaTransliterate;

impl Transliterate for KanaTransliterate {
    fn to_katakana(&self, text: &str) -> String {
        if !text.chars().any(is_japanese_letter) {
            return text.to_string();
        }

        ConvertJapanese::to_katakana(text)
    }
}

/// The "backend absent" transliterator: always returns its input
/// unchanged, preserving the no-failure contract when no linguistic
/// service is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTransliterate;

impl Transliterate for PassthroughTransliterate {
    fn to_katakana(&self, text: &str) -> String {
        text.to_string()
    }
}
