use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::name_index::PersonName;

/// A contact document, mirroring the wire shape the remote document
/// store uses (camelCase field names, optional furigana readings).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Person {
    pub id: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(
        rename = "lastNameFurigana",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name_furigana: Option<String>,
    #[serde(
        rename = "firstNameFurigana",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name_furigana: Option<String>,
    #[serde(rename = "groupId", default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Extracts the name fields the classifier reads.
    pub fn name(&self) -> PersonName {
        PersonName {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            nickname: self.nickname.clone(),
            last_name_furigana: self.last_name_furigana.clone(),
            first_name_furigana: self.first_name_furigana.clone(),
        }
    }

    /// Display name for lists: "lastName firstName", falling back to
    /// the nickname when both name fields are empty.
    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() && self.first_name.is_empty() {
            return self.nickname.clone();
        }
        format!("{} {}", self.last_name, self.first_name)
            .trim()
            .to_string()
    }
}

impl From<&Person> for PersonName {
    fn from(person: &Person) -> Self {
        person.name()
    }
}
