use diesel::prelude::*;

use crate::domain::types::{TypeConstraintError, UserId};
use crate::domain::user::User as DomainUser;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::user::User`].
///
/// `secondary_skills` holds a JSON array encoded as text.
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub school: String,
    pub title: String,
    pub main_skill: String,
    pub secondary_skills: String,
    pub description: Option<String>,
    pub active: bool,
    pub phone_number: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`] used by the seeding tool.
pub struct NewUser<'a> {
    pub id: i32,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub avatar: Option<&'a str>,
    pub school: &'a str,
    pub title: &'a str,
    pub main_skill: &'a str,
    pub secondary_skills: String,
    pub description: Option<&'a str>,
    pub active: bool,
    pub phone_number: Option<&'a str>,
}

fn decode_skills(raw: &str) -> Result<Vec<String>, TypeConstraintError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw)
        .map_err(|e| TypeConstraintError::InvalidValue(format!("secondary_skills: {e}")))
}

fn encode_skills(skills: &[String]) -> String {
    serde_json::Value::from(skills).to_string()
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(user.id)?,
            secondary_skills: decode_skills(&user.secondary_skills)?,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            avatar: user.avatar,
            school: user.school,
            title: user.title,
            main_skill: user.main_skill,
            description: user.description,
            active: user.active,
            phone_number: user.phone_number,
        })
    }
}

impl<'a> From<&'a DomainUser> for NewUser<'a> {
    fn from(user: &'a DomainUser) -> Self {
        Self {
            id: user.id.get(),
            first_name: user.first_name.as_str(),
            last_name: user.last_name.as_str(),
            email: user.email.as_str(),
            avatar: user.avatar.as_deref(),
            school: user.school.as_str(),
            title: user.title.as_str(),
            main_skill: user.main_skill.as_str(),
            secondary_skills: encode_skills(&user.secondary_skills),
            description: user.description.as_deref(),
            active: user.active,
            phone_number: user.phone_number.as_deref(),
        }
    }
}
