use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::dto::api::{ApiResponse, RawUsersQuery, UsersQuery};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::users as user_service;
use crate::services::{ServiceError, ServiceResult};

/// Runs blocking repository work off the async workers.
async fn run_blocking<T, F>(repo: web::Data<DieselRepository>, f: F) -> ServiceResult<T>
where
    F: FnOnce(&DieselRepository) -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    let repo = repo.into_inner();
    web::block(move || f(repo.as_ref()))
        .await
        .unwrap_or_else(|e| {
            log::error!("Blocking task failed: {e}");
            Err(ServiceError::Internal(format!("blocking task failed: {e}")))
        })
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

#[get("/users")]
pub async fn list_users(req: HttpRequest, repo: web::Data<DieselRepository>) -> impl Responder {
    let params = match serde_html_form::from_str::<RawUsersQuery>(req.query_string()) {
        Ok(raw) => UsersQuery::from(raw),
        Err(e) => {
            log::warn!("Rejected users query {:?}: {e}", req.query_string());
            return error_response(
                &ServiceError::InvalidQuery(format!("Invalid query string: {e}")),
                "Failed to fetch users",
            );
        }
    };

    match run_blocking(repo, move |repo| user_service::list_users(repo, &params)).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err, "Failed to fetch users"),
    }
}

#[get("/users/{user_id}")]
pub async fn show_user(
    user_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let raw_id = user_id.into_inner();

    match run_blocking(repo, move |repo| user_service::get_user(repo, &raw_id)).await {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::new(user)),
        Err(err) => error_response(&err, "Failed to fetch user"),
    }
}

#[get("/skills")]
pub async fn list_skills(repo: web::Data<DieselRepository>) -> impl Responder {
    match run_blocking(repo, user_service::list_skills::<DieselRepository>).await {
        Ok(skills) => HttpResponse::Ok().json(ApiResponse::new(skills)),
        Err(err) => error_response(&err, "Failed to fetch skills"),
    }
}
