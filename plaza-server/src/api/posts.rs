use axum::{extract::State, Json};

use crate::{
    api::{ApiError, ApiResult},
    db::repositories::{is_constraint_violation, PostRepository},
    state::AppState,
};
use plaza_types::{CreatePostRequest, Post};

/// GET /posts - Get all posts with author info, newest first
pub async fn get_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<Post>>> {
    let repo = PostRepository::new(state.db.pool.clone());
    let posts = repo
        .list_all()
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    Ok(Json(posts))
}

/// POST /posts - Create a new post
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> ApiResult<Json<Post>> {
    let repo = PostRepository::new(state.db.pool.clone());

    // The author is not looked up beforehand; the foreign key on
    // posts.user_id rejects unknown authors at insert time
    let post_id = match repo.create(&payload.title, &payload.body, payload.user_id) {
        Ok(id) => id,
        Err(e) if is_constraint_violation(&e) => {
            return Err(ApiError::BadRequest(format!(
                "user_id {} does not reference an existing user",
                payload.user_id
            )));
        }
        Err(e) => return Err(ApiError::InternalError(e.to_string())),
    };

    // Re-read the created row joined with the author's username
    let post = repo
        .get_by_id(post_id)
        .map_err(|e| ApiError::InternalError(e.to_string()))?
        .ok_or_else(|| ApiError::InternalError("Created post not found".to_string()))?;

    Ok(Json(post))
}
