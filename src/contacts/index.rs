//! Phonetic index construction.
//!
//! Turns a flat persons collection into the bucketed structure a
//! jump-to-letter sidebar renders: contacts grouped by their
//! [`IndexBucket`], buckets in display order (initials by code point,
//! "Other" last), contacts within a bucket in a stable phonetic order.

use std::collections::BTreeMap;

use super::models::Person;
use crate::name_index::{IndexBucket, classify};

/// One rendered section of the index: the bucket and its members.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSection {
    pub bucket: IndexBucket,
    pub persons: Vec<Person>,
}

/// Sort key for contacts inside a bucket: furigana when present (the
/// explicit reading sorts most reliably), then the name fields, then
/// the nickname.
fn phonetic_sort_key(person: &Person) -> String {
    let last = person
        .last_name_furigana
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(&person.last_name);
    let first = person
        .first_name_furigana
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(&person.first_name);

    let key = format!("{last}{first}");
    if key.is_empty() {
        person.nickname.clone()
    } else {
        key
    }
}

/// Groups persons into ordered index sections.
///
/// Buckets are recomputed from the current name fields on every call;
/// nothing here is persisted. Sections come back in display order with
/// the "Other" bucket last, and each section's members are sorted by
/// their phonetic key.
///
/// # Example
/// ```
/// use chrono::Utc;
/// use meibo::contacts::{Person, build_index};
///
/// let person = Person {
///     id: "p-1".to_string(),
///     last_name: "田中".to_string(),
///     first_name: "太郎".to_string(),
///     nickname: String::new(),
///     last_name_furigana: Some("たなか".to_string()),
///     first_name_furigana: Some("たろう".to_string()),
///     group_id: None,
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
///
/// let sections = build_index(vec![person]);
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].bucket.label(), "た");
/// ```
pub fn build_index(persons: Vec<Person>) -> Vec<IndexSection> {
    let mut sections: BTreeMap<IndexBucket, Vec<Person>> = BTreeMap::new();

    for person in persons {
        let bucket = classify(&person.name());
        sections.entry(bucket).or_default().push(person);
    }

    sections
        .into_iter()
        .map(|(bucket, mut persons)| {
            persons.sort_by_key(phonetic_sort_key);
            IndexSection { bucket, persons }
        })
        .collect()
}
