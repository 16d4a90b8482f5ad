//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::types::UserId;
use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::{UserListQuery, UserReader, UserWriter};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
        fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
        fn list_main_skills(&self) -> RepositoryResult<Vec<String>>;
    }

    impl UserWriter for Repository {
        fn replace_users(&self, users: &[User]) -> RepositoryResult<usize>;
    }
}
