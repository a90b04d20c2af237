use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::{info, warn};

use crate::{
    adapters::dto::comment_dto::{
        CommentListResponse, CommentResponse, CreateCommentRequest, PosterQuery,
    },
    application::{
        error::ApplicationError,
        repositories::{comment_repository::CommentRepository, profile_repository::ProfileRepository},
    },
    domain::models::{comment::MAX_COMMENT_LENGTH, session::SessionUser},
};

pub struct CommentController;

impl CommentController {
    /// GET /api/comments?posterId=
    pub async fn list_comments(
        State(comment_repo): State<Arc<dyn CommentRepository>>,
        Query(query): Query<PosterQuery>,
    ) -> Result<Json<CommentListResponse>, ApplicationError> {
        let poster_id = query
            .poster_id
            .ok_or_else(|| ApplicationError::BadRequest("Poster ID required".to_string()))?;

        let comments = comment_repo.list_comments(poster_id).await?;
        Ok(Json(CommentListResponse { comments }))
    }

    /// POST /api/comments
    pub async fn create_comment(
        State(comment_repo): State<Arc<dyn CommentRepository>>,
        State(profile_repo): State<Arc<dyn ProfileRepository>>,
        Extension(user): Extension<SessionUser>,
        Json(body): Json<CreateCommentRequest>,
    ) -> Result<(StatusCode, Json<CommentResponse>), ApplicationError> {
        let content = body.content.as_deref().map(str::trim).unwrap_or("");
        let poster_id = match body.poster_id {
            Some(poster_id) if !content.is_empty() => poster_id,
            _ => {
                return Err(ApplicationError::BadRequest(
                    "Missing required fields".to_string(),
                ))
            }
        };

        if content.chars().count() > MAX_COMMENT_LENGTH {
            warn!("Comment from {} exceeds {} characters", user.id, MAX_COMMENT_LENGTH);
            return Err(ApplicationError::BadRequest("Comment too long".to_string()));
        }

        profile_repo.ensure_profile(&user).await?;

        let comment = comment_repo
            .create_comment(poster_id, user.id, content)
            .await?;

        info!("Comment {} on poster {} by {}", comment.id, poster_id, user.id);

        Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
    }
}
