use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Extension, Json,
};
use tracing::info;

use crate::{
    adapters::{
        dto::{
            comment_dto::PosterQuery,
            rating_dto::{RatingResponse, SubmitRatingRequest},
        },
        middleware::optional_session,
    },
    application::{
        error::ApplicationError,
        repositories::{profile_repository::ProfileRepository, rating_repository::RatingRepository},
        services::{rating_aggregator, AuthSession},
    },
    domain::models::{
        rating::{RatingSummary, MAX_RATING, MIN_RATING},
        session::SessionUser,
    },
};

pub struct RatingController;

impl RatingController {
    /// POST /api/ratings
    pub async fn submit_rating(
        State(rating_repo): State<Arc<dyn RatingRepository>>,
        State(profile_repo): State<Arc<dyn ProfileRepository>>,
        Extension(user): Extension<SessionUser>,
        Json(body): Json<SubmitRatingRequest>,
    ) -> Result<Json<RatingResponse>, ApplicationError> {
        let (poster_id, value) = match (body.poster_id, body.rating) {
            (Some(poster_id), Some(value)) if (MIN_RATING..=MAX_RATING).contains(&value) => {
                (poster_id, value)
            }
            _ => {
                return Err(ApplicationError::BadRequest(
                    "Invalid rating (must be 1-5)".to_string(),
                ))
            }
        };

        profile_repo.ensure_profile(&user).await?;

        let rating = rating_repo.upsert_rating(poster_id, user.id, value).await?;
        info!("User {} rated poster {} with {}", user.id, poster_id, value);

        Ok(Json(RatingResponse { rating }))
    }

    /// GET /api/ratings?posterId=
    pub async fn rating_summary(
        State(rating_repo): State<Arc<dyn RatingRepository>>,
        State(auth_session): State<Arc<dyn AuthSession>>,
        headers: HeaderMap,
        Query(query): Query<PosterQuery>,
    ) -> Result<Json<RatingSummary>, ApplicationError> {
        let poster_id = query
            .poster_id
            .ok_or_else(|| ApplicationError::BadRequest("Poster ID required".to_string()))?;

        let viewer = optional_session(&auth_session, &headers).await;
        let ratings = rating_repo.get_ratings(poster_id).await?;

        Ok(Json(rating_aggregator::summarize(
            &ratings,
            viewer.map(|user| user.id),
        )))
    }
}
