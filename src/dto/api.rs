//! Request and response shapes of the `/users` API.

use serde::{Deserialize, Serialize};

/// Raw query parameters accepted by `GET /users`.
///
/// Every value is kept as the string the client sent; normalization happens
/// in [`crate::services::users::build_list_query`].
#[derive(Debug, Default, Clone)]
pub struct UsersQuery {
    pub search: Option<String>,
    pub active: Option<String>,
    pub skill: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Query string as decoded, with every occurrence of each key.
///
/// Repeated keys are legal in a query string; the first occurrence wins.
#[derive(Debug, Default, Deserialize)]
pub struct RawUsersQuery {
    #[serde(default)]
    pub search: Vec<String>,
    #[serde(default)]
    pub active: Vec<String>,
    #[serde(default)]
    pub skill: Vec<String>,
    #[serde(default)]
    pub page: Vec<String>,
    #[serde(default)]
    pub limit: Vec<String>,
}

impl From<RawUsersQuery> for UsersQuery {
    fn from(raw: RawUsersQuery) -> Self {
        fn first(values: Vec<String>) -> Option<String> {
            values.into_iter().next()
        }

        Self {
            search: first(raw.search),
            active: first(raw.active),
            skill: first(raw.skill),
            page: first(raw.page),
            limit: first(raw.limit),
        }
    }
}

/// Success envelope wrapping a single payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            success: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// Success envelope for a page of records.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub success: bool,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, pagination: PaginationMeta) -> Self {
        Self {
            data,
            success: true,
            pagination,
        }
    }
}

/// Error envelope returned by every endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paginated_response_uses_camel_case_total_pages() {
        let response = PaginatedResponse::<u8>::new(
            vec![],
            PaginationMeta {
                page: 1,
                limit: 10,
                total: 0,
                total_pages: 0,
            },
        );
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "data": [],
                "success": true,
                "pagination": {"page": 1, "limit": 10, "total": 0, "totalPages": 0},
            })
        );
    }

    #[test]
    fn error_envelope_shape() {
        let err = ApiError::new("NOT_FOUND", "User with ID 4 not found");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"success": false, "error": "NOT_FOUND", "message": "User with ID 4 not found"})
        );
    }

    #[test]
    fn users_query_decodes_from_html_form() {
        let query: UsersQuery = serde_html_form::from_str::<RawUsersQuery>(
            "search=ann&active=true&page=2",
        )
        .unwrap()
        .into();
        assert_eq!(query.search.as_deref(), Some("ann"));
        assert_eq!(query.active.as_deref(), Some("true"));
        assert_eq!(query.page.as_deref(), Some("2"));
        assert_eq!(query.limit, None);
        assert_eq!(query.skill, None);
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let query: UsersQuery =
            serde_html_form::from_str::<RawUsersQuery>("page=1&page=2&skill=Go&skill=Rust")
                .unwrap()
                .into();
        assert_eq!(query.page.as_deref(), Some("1"));
        assert_eq!(query.skill.as_deref(), Some("Go"));
        assert_eq!(query.search, None);
    }
}
