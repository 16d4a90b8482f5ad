use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::filter::UserFilter;
use crate::domain::types::UserId;
use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod user;

/// Page window applied to ordered listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Zero-based row offset of the first record on this page.
    pub fn offset(&self) -> usize {
        self.page.max(1).saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Maximum number of rows on this page.
    pub fn limit(&self) -> usize {
        self.per_page
    }

    /// Number of pages needed to hold `total` records, 0 when there are none.
    pub fn total_pages(&self, total: usize) -> usize {
        if self.per_page == 0 {
            return 0;
        }
        total.div_ceil(self.per_page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub filter: UserFilter,
    pub pagination: Option<Pagination>,
}

impl UserListQuery {
    pub fn new(filter: UserFilter) -> Self {
        Self {
            filter,
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

pub trait UserReader {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
    /// Counts every user matching the filter and loads the requested page
    /// ordered by id. Both reads observe the same snapshot.
    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
    /// Distinct main skills, sorted ascending.
    fn list_main_skills(&self) -> RepositoryResult<Vec<String>>;
}

pub trait UserWriter {
    /// Replaces the whole table with `users`, returning the inserted row count.
    fn replace_users(&self, users: &[User]) -> RepositoryResult<usize>;
}

/// Diesel-backed repository sharing one connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 10).offset(), 10);
        assert_eq!(Pagination::new(3, 1).offset(), 2);
    }

    #[test]
    fn page_zero_behaves_like_first_page() {
        assert_eq!(Pagination::new(0, 10).offset(), 0);
    }

    #[test]
    fn huge_page_saturates_instead_of_overflowing() {
        assert_eq!(Pagination::new(usize::MAX, 1000).offset(), usize::MAX);
    }

    #[test]
    fn total_pages_rounds_up() {
        let window = Pagination::new(1, 10);
        assert_eq!(window.total_pages(0), 0);
        assert_eq!(window.total_pages(1), 1);
        assert_eq!(window.total_pages(10), 1);
        assert_eq!(window.total_pages(11), 2);
        assert_eq!(Pagination::new(1, 1).total_pages(3), 3);
    }

    #[test]
    fn list_query_defaults_to_unpaginated() {
        let query = UserListQuery::new(UserFilter::new());
        assert_eq!(query.pagination, None);
        let query = query.paginate(2, 5);
        assert_eq!(query.pagination, Some(Pagination::new(2, 5)));
    }
}
