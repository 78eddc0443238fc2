use axum::{extract::State, Json};

use crate::{
    api::{ApiError, ApiResult},
    db::repositories::{is_constraint_violation, UserRepository},
    state::AppState,
};
use plaza_types::{CreateUserRequest, User};

const DEFAULT_ROLE: &str = "user";

/// GET /users - Get all users, newest first
pub async fn get_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let repo = UserRepository::new(state.db.pool.clone());
    let users = repo
        .list_all()
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    Ok(Json(users))
}

/// POST /users - Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<Json<User>> {
    let repo = UserRepository::new(state.db.pool.clone());
    let role = payload.role.as_deref().unwrap_or(DEFAULT_ROLE);

    let user_id = match repo.create(&payload.username, role) {
        Ok(id) => id,
        Err(e) if is_constraint_violation(&e) => {
            return Err(ApiError::BadRequest("Username already exists".to_string()));
        }
        Err(e) => return Err(ApiError::InternalError(e.to_string())),
    };

    // Re-read the created row so the response carries the generated id
    // and timestamp
    let user = repo
        .get_by_id(user_id)
        .map_err(|e| ApiError::InternalError(e.to_string()))?
        .ok_or_else(|| ApiError::InternalError("Created user not found".to_string()))?;

    Ok(Json(user))
}
