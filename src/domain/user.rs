use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

/// A directory entry as exposed by the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub school: String,
    pub title: String,
    pub main_skill: String,
    /// Additional skills; order carries no meaning.
    #[serde(default)]
    pub secondary_skills: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub active: bool,
    #[serde(default)]
    pub phone_number: Option<String>,
}
