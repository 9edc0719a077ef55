//! Name classification and the furigana-driven sort index.
//!
//! This module is the core of the crate:
//! - [`classify`] maps a contact's name fields to an [`IndexBucket`],
//!   the single-character (or sentinel) key a jump-to-letter sidebar
//!   groups by
//! - [`scripts`] holds the Unicode script/category predicates the
//!   classifier relies on
//! - [`transliterate`] models the external reading service that turns
//!   text into katakana

pub mod bucket;
pub mod scripts;
pub mod transliterate;

pub use bucket::{IndexBucket, PersonName, classify};
pub use transliterate::{KanaTransliterate, PassthroughTransliterate, Transliterate};
