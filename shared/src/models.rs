//! Data models for the Contact List application

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account
///
/// The password is kept exactly as supplied at registration and compared
/// verbatim on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

/// A contact owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub user_id: Uuid,
}

impl Contact {
    /// Whether `text` occurs in the name or the phone number.
    ///
    /// Case-sensitive. The empty string matches every contact.
    pub fn matches(&self, text: &str) -> bool {
        self.name.contains(text) || self.phone.contains(text)
    }
}
