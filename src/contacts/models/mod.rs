//! Contact data models shared across the store and the index builder.

pub mod group;
pub mod person;
pub mod user;

pub use group::Group;
pub use person::Person;
pub use user::User;

use serde::{Deserialize, Serialize};

/// On-disk shape of a contacts JSON file: both collections, either of
/// which may be absent.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ContactsFile {
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub groups: Vec<Group>,
}
