//! Filter criteria for the user listing.
//!
//! A [`UserFilter`] is built once from request parameters and handed to the
//! repository unchanged. An absent criterion places no constraint on results.

use crate::domain::types::{SearchTerm, SkillName};
use crate::domain::user::User;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Case-insensitive substring matched against first name, last name or email.
    pub search: Option<SearchTerm>,
    /// Exact match on the active flag.
    pub active: Option<bool>,
    /// Exact match on the main skill.
    pub main_skill: Option<SkillName>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: SearchTerm) -> Self {
        self.search = Some(term);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn main_skill(mut self, skill: SkillName) -> Self {
        self.main_skill = Some(skill);
        self
    }

    /// Evaluates the filter against an in-memory user.
    ///
    /// Search compares Unicode-lowercased text, like the SQL query does.
    pub fn matches(&self, user: &User) -> bool {
        if let Some(term) = &self.search {
            let needle = term.as_str().to_lowercase();
            let hit = [&user.first_name, &user.last_name, &user.email]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if self.active.is_some_and(|active| user.active != active) {
            return false;
        }
        if self
            .main_skill
            .as_ref()
            .is_some_and(|skill| user.main_skill != skill.as_str())
        {
            return false;
        }
        true
    }
}
