//! Meibo - Phonetic Contact Index Library
//!
//! This library implements the contact-directory core of a Japanese
//! address book: classifying contact names into phonetic sort buckets
//! (furigana first, with a "その他" catch-all for un-transliterated
//! kanji) and building the jump-to-letter index from a contacts
//! collection.
//!
//! # Examples
//!
//! ```rust
//! use meibo::name_index::{classify, IndexBucket, PersonName};
//!
//! let name = PersonName {
//!     last_name: "田中".to_string(),
//!     last_name_furigana: Some("たなか".to_string()),
//!     ..Default::default()
//! };
//!
//! // The explicit reading wins: this contact files under た
//! assert_eq!(classify(&name), IndexBucket::Initial('た'));
//!
//! // Without a reading, a bare kanji name cannot be phonetically
//! // sorted and lands in the catch-all bucket
//! let name = PersonName {
//!     last_name: "田中".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(classify(&name).label(), "その他");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod contacts;
pub mod error;
pub mod logging;
pub mod name_index;

// Re-export commonly used types for convenience
pub use config::Config;
pub use contacts::{ContactStore, Group, IndexSection, MemoryStore, Person, User, build_index};
pub use error::AppError;
pub use name_index::{IndexBucket, KanaTransliterate, PersonName, Transliterate, classify};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
