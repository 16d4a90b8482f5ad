//! Listing, lookup and skill catalogue services for directory users.

use crate::domain::filter::UserFilter;
use crate::domain::types::{SearchTerm, SkillName, UserId};
use crate::domain::user::User;
use crate::dto::api::{PaginatedResponse, PaginationMeta, UsersQuery};
use crate::repository::{Pagination, UserListQuery, UserReader};
use crate::services::{ServiceError, ServiceResult};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;
/// Largest page size a client may request.
pub const MAX_LIMIT: usize = 1000;

/// Parses a 1-based counter from its leading integer, so `2abc` reads as 2.
///
/// Input without leading digits yields `default`. Values below one are
/// clamped to one, values beyond `usize` saturate.
fn parse_counter(raw: Option<&str>, default: usize) -> usize {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return default;
    };
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        log::debug!("Ignoring non-numeric pagination value {value:?}");
        return default;
    }
    if negative {
        return 1;
    }
    digits.parse::<usize>().unwrap_or(usize::MAX).max(1)
}

/// `true`/`false` in any ASCII case; anything else places no constraint.
fn parse_active(raw: Option<&str>) -> Option<bool> {
    let value = raw?.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        if !value.is_empty() {
            log::debug!("Ignoring unrecognised active filter {value:?}");
        }
        None
    }
}

/// Normalizes raw query parameters into a filter and a page window.
pub fn build_list_query(params: &UsersQuery) -> UserListQuery {
    let mut filter = UserFilter::new();

    if let Some(term) = params.search.as_deref().and_then(|s| SearchTerm::new(s).ok()) {
        filter = filter.search(term);
    }
    if let Some(active) = parse_active(params.active.as_deref()) {
        filter = filter.active(active);
    }
    if let Some(skill) = params.skill.as_deref().and_then(|s| SkillName::new(s).ok()) {
        filter = filter.main_skill(skill);
    }

    let page = parse_counter(params.page.as_deref(), DEFAULT_PAGE);
    let limit = parse_counter(params.limit.as_deref(), DEFAULT_LIMIT).min(MAX_LIMIT);

    UserListQuery::new(filter).paginate(page, limit)
}

/// Returns one page of users matching the request parameters.
pub fn list_users<R>(repo: &R, params: &UsersQuery) -> ServiceResult<PaginatedResponse<User>>
where
    R: UserReader + ?Sized,
{
    let query = build_list_query(params);
    let window = query
        .pagination
        .unwrap_or_else(|| Pagination::new(DEFAULT_PAGE, DEFAULT_LIMIT));

    let (total, users) = repo.list_users(query).map_err(|err| {
        log::error!("Failed to list users: {err}");
        ServiceError::from(err)
    })?;

    Ok(PaginatedResponse::new(
        users,
        PaginationMeta {
            page: window.page,
            limit: window.per_page,
            total,
            total_pages: window.total_pages(total),
        },
    ))
}

/// Resolves a raw path identifier to a user.
///
/// The identifier is validated before the repository is touched.
pub fn get_user<R>(repo: &R, raw_id: &str) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    let id: UserId = raw_id
        .parse()
        .map_err(|_| ServiceError::InvalidId("User ID must be a valid number".to_string()))?;

    match repo.get_user_by_id(id) {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(ServiceError::NotFound(format!("User with ID {id} not found"))),
        Err(err) => {
            log::error!("Failed to get user {id}: {err}");
            Err(err.into())
        }
    }
}

/// Distinct main skills for building filter choices.
pub fn list_skills<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: UserReader + ?Sized,
{
    repo.list_main_skills().map_err(|err| {
        log::error!("Failed to list skills: {err}");
        ServiceError::from(err)
    })
}
