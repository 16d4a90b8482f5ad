use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::db::unicode_lower;
use crate::domain::filter::UserFilter;
use crate::domain::types::UserId;
use crate::domain::user::User;
use crate::models::user::{NewUser as DbNewUser, User as DbUser};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, UserListQuery, UserReader, UserWriter};
use crate::schema::users;

/// Wraps a search term in `%` wildcards, escaping LIKE metacharacters with `\`.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn to_sql_int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn filtered_users(filter: &UserFilter) -> users::BoxedQuery<'static, Sqlite> {
    let mut items = users::table.into_boxed::<Sqlite>();

    if let Some(term) = &filter.search {
        // Both sides are lowered in Unicode; LIKE alone only folds ASCII.
        let pattern = like_pattern(&term.as_str().to_lowercase());
        items = items.filter(
            unicode_lower(users::first_name)
                .like(pattern.clone())
                .escape('\\')
                .or(unicode_lower(users::last_name)
                    .like(pattern.clone())
                    .escape('\\'))
                .or(unicode_lower(users::email).like(pattern).escape('\\')),
        );
    }
    if let Some(active) = filter.active {
        items = items.filter(users::active.eq(active));
    }
    if let Some(skill) = &filter.main_skill {
        items = items.filter(users::main_skill.eq(skill.as_str().to_owned()));
    }
    items
}

fn into_domain(rows: Vec<DbUser>) -> RepositoryResult<Vec<User>> {
    rows.into_iter()
        .map(|row| User::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        let mut conn = self.conn()?;

        let row = users::table
            .find(id.get())
            .first::<DbUser>(&mut conn)
            .optional()?;

        row.map(|r| User::try_from(r).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)> {
        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total = filtered_users(&query.filter)
                .count()
                .get_result::<i64>(conn)?;
            let total = usize::try_from(total)
                .map_err(|e| RepositoryError::Unexpected(format!("negative count: {e}")))?;

            let mut items = filtered_users(&query.filter).order(users::id.asc());
            if let Some(pagination) = &query.pagination {
                items = items
                    .offset(to_sql_int(pagination.offset()))
                    .limit(to_sql_int(pagination.limit()));
            }

            let rows = items.load::<DbUser>(conn)?;
            Ok((total, into_domain(rows)?))
        })
    }

    fn list_main_skills(&self) -> RepositoryResult<Vec<String>> {
        let mut conn = self.conn()?;

        let skills = users::table
            .select(users::main_skill)
            .distinct()
            .order(users::main_skill.asc())
            .load::<String>(&mut conn)?;

        Ok(skills)
    }
}

impl UserWriter for DieselRepository {
    fn replace_users(&self, new_users: &[User]) -> RepositoryResult<usize> {
        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(users::table).execute(conn)?;
            if new_users.is_empty() {
                return Ok(0);
            }
            let insertables: Vec<DbNewUser> = new_users.iter().map(Into::into).collect();
            let inserted = diesel::insert_into(users::table)
                .values(&insertables)
                .execute(conn)?;
            Ok(inserted)
        })
    }
}
