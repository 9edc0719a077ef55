//! Name classification into phonetic index buckets.
//!
//! This module provides:
//! - The [`PersonName`] input record (name fields plus optional furigana)
//! - The [`IndexBucket`] sort key used by the jump-to-letter index
//! - [`classify`], the priority chain that maps a name to its bucket

use std::fmt;

use serde::{Deserialize, Serialize};

use super::scripts::{is_decimal_digit, is_han, is_symbol};
use crate::constants::OTHER_BUCKET_LABEL;

/// The name fields of a contact, as read by the classifier.
///
/// Every field may be empty; an all-empty record is valid input and
/// classifies into the "Other" bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    /// Family name (possibly empty)
    #[serde(default)]
    pub last_name: String,
    /// Given name (possibly empty)
    #[serde(default)]
    pub first_name: String,
    /// Free-form nickname (possibly empty)
    #[serde(default)]
    pub nickname: String,
    /// Precomputed phonetic reading of the family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name_furigana: Option<String>,
    /// Precomputed phonetic reading of the given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name_furigana: Option<String>,
}

/// A single-character (or sentinel) key used to group contacts for an
/// alphabetical/phonetic jump-list.
///
/// Buckets have no identity or lifecycle: they are recomputed on every
/// read and never persisted. The ordering places initials by code
/// point with [`IndexBucket::Other`] always last, which is the order
/// the sidebar renders them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndexBucket {
    /// A concrete leading character (kana, Latin letter, ...)
    Initial(char),
    /// Catch-all for names without a reliable phonetic initial
    Other,
}

impl IndexBucket {
    /// Returns the display label for this bucket: the initial itself,
    /// or "その他" for the catch-all.
    ///
    /// # Example
    /// ```
    /// use meibo::name_index::IndexBucket;
    ///
    /// assert_eq!(IndexBucket::Initial('た').label(), "た");
    /// assert_eq!(IndexBucket::Other.label(), "その他");
    /// ```
    pub fn label(&self) -> String {
        match self {
            IndexBucket::Initial(c) => c.to_string(),
            IndexBucket::Other => OTHER_BUCKET_LABEL.to_string(),
        }
    }
}

impl fmt::Display for IndexBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexBucket::Initial(c) => write!(f, "{c}"),
            IndexBucket::Other => f.write_str(OTHER_BUCKET_LABEL),
        }
    }
}

/// First character of an optional field, treating `None` and `""` the
/// same way.
fn leading_char(field: Option<&str>) -> Option<char> {
    field.and_then(|s| s.chars().next())
}

/// Classifies a name into its phonetic index bucket.
///
/// Deterministic, pure and total: every input has a defined output,
/// including the all-empty record. The decision chain, first match
/// wins:
///
/// 1. Furigana: a non-empty furigana field (family first, then given)
///    contributes its first character verbatim. Furigana is an explicit
///    reading supplied by the user and is never re-validated, even if
///    it starts with a digit or symbol.
/// 2. Name: `last_name` if non-empty, else `first_name`. A Han initial
///    goes to "Other" (a bare kanji is not a pronunciation and cannot
///    be phonetically sorted); anything else is used verbatim.
/// 3. Nickname: a Han, decimal-digit or Symbol-category initial goes to
///    "Other"; anything else is used verbatim. Punctuation such as '!'
///    is not in the Symbol category and forms its own bucket.
/// 4. All fields empty: "Other".
///
/// # Example
/// ```
/// use meibo::name_index::{classify, IndexBucket, PersonName};
///
/// let name = PersonName {
///     last_name: "田中".to_string(),
///     last_name_furigana: Some("たなか".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(classify(&name), IndexBucket::Initial('た'));
///
/// let name = PersonName {
///     last_name: "田中".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(classify(&name), IndexBucket::Other);
/// ```
pub fn classify(name: &PersonName) -> IndexBucket {
    if let Some(c) = leading_char(name.last_name_furigana.as_deref()) {
        return IndexBucket::Initial(c);
    }
    if let Some(c) = leading_char(name.first_name_furigana.as_deref()) {
        return IndexBucket::Initial(c);
    }

    let name_field = if !name.last_name.is_empty() {
        &name.last_name
    } else {
        &name.first_name
    };
    if let Some(c) = name_field.chars().next() {
        return if is_han(c) {
            IndexBucket::Other
        } else {
            IndexBucket::Initial(c)
        };
    }

    if let Some(c) = name.nickname.chars().next() {
        return if is_han(c) || is_decimal_digit(c) || is_symbol(c) {
            IndexBucket::Other
        } else {
            IndexBucket::Initial(c)
        };
    }

    IndexBucket::Other
}
