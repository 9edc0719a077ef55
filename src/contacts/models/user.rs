use serde::{Deserialize, Serialize};

/// The signed-in user, as reported by the identity provider.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization_with_defaults() {
        let json = r#"{"id": "u-1"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u-1");
        assert!(user.email.is_empty());
        assert!(user.display_name.is_empty());
    }
}
