use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use presyohan_core::AppError;
use presyohan_domain::EmailAddress;

use crate::dto::{UserLookupQuery, UserResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_users_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_service
        .find_all()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn lookup_user_handler(
    State(state): State<AppState>,
    query: Result<Query<UserLookupQuery>, QueryRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Query(query) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let email = EmailAddress::new(query.email)?;

    let user = state
        .user_service
        .find_by_email(email.as_str())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user '{email}' does not exist")))?;

    Ok(Json(UserResponse::from(user)))
}
