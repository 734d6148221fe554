//! User record types

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::Gender;

/// Identifier of a user record.
///
/// Remote records carry the identifier chosen by the listing endpoint; local
/// records get one from the store's counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// Returns the raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user record as displayed in the tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A record owned by the local collection store.
pub type LocalUser = User;

impl User {
    /// Returns every field except the identifier.
    pub fn fields(&self) -> UserFields {
        UserFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            gender: self.gender,
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Returns `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The editable part of a record, as produced by a validated form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserFields {
    /// Attaches an identifier, producing a full record.
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            gender: self.gender,
            email: self.email,
            phone: self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserFields {
        UserFields {
            first_name: "Emily".to_string(),
            last_name: "Johnson".to_string(),
            age: 28,
            gender: Gender::Female,
            email: "emily.johnson@x.dummyjson.com".to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_with_id_keeps_fields() {
        let user = sample().with_id(UserId(7));
        assert_eq!(user.id, UserId(7));
        assert_eq!(user.fields(), sample());
        assert_eq!(user.full_name(), "Emily Johnson");
    }

    #[test]
    fn test_serializes_camel_case_without_empty_phone() {
        let json = serde_json::to_value(sample().with_id(UserId(1))).unwrap();
        assert_eq!(json["firstName"], "Emily");
        assert_eq!(json["id"], 1);
        assert!(json.get("phone").is_none());
    }
}
