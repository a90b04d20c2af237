use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    adapters::dto::poster_dto::{non_blank, CreatePosterRequest, PosterResponse},
    application::{
        dto::poster_dto::{NewPosterDTO, UNKNOWN_IMAGE_FILENAME},
        error::ApplicationError,
        repositories::{poster_repository::PosterRepository, profile_repository::ProfileRepository},
    },
    domain::models::{party::Party, poster::PosterListing, session::SessionUser},
};

pub struct PosterController;

impl PosterController {
    /// GET /api/posters
    pub async fn list_posters(
        State(poster_repo): State<Arc<dyn PosterRepository>>,
    ) -> Result<Json<Vec<PosterListing>>, ApplicationError> {
        let posters = poster_repo.list_posters().await?;
        Ok(Json(posters))
    }

    /// GET /api/posters/{poster_id}
    pub async fn get_poster(
        State(poster_repo): State<Arc<dyn PosterRepository>>,
        Path(poster_id): Path<Uuid>,
    ) -> Result<Json<PosterListing>, ApplicationError> {
        let poster = poster_repo.get_poster(poster_id).await?;
        Ok(Json(poster))
    }

    /// POST /api/posters
    pub async fn create_poster(
        State(poster_repo): State<Arc<dyn PosterRepository>>,
        State(profile_repo): State<Arc<dyn ProfileRepository>>,
        Extension(user): Extension<SessionUser>,
        Json(body): Json<CreatePosterRequest>,
    ) -> Result<(StatusCode, Json<PosterResponse>), ApplicationError> {
        let (title, image_url) = match (non_blank(body.title), non_blank(body.image_url)) {
            (Some(title), Some(image_url)) => (title, image_url),
            _ => {
                warn!("Poster from {} is missing title or image URL", user.id);
                return Err(ApplicationError::BadRequest(
                    "Missing required fields".to_string(),
                ));
            }
        };

        // posters.uploaded_by references profiles; sign-up may not have created one.
        profile_repo.ensure_profile(&user).await?;

        let poster = poster_repo
            .create_poster(NewPosterDTO {
                title,
                description: non_blank(body.description),
                image_url,
                image_filename: non_blank(body.filename)
                    .unwrap_or_else(|| UNKNOWN_IMAGE_FILENAME.to_string()),
                party_id: body.party_id,
                uploaded_by: user.id,
                location: non_blank(body.location),
                date_photographed: body.date_photographed,
            })
            .await?;

        info!("Poster {} created by {}", poster.id, user.id);

        Ok((StatusCode::CREATED, Json(PosterResponse { poster })))
    }

    /// GET /api/parties
    pub async fn list_parties(
        State(poster_repo): State<Arc<dyn PosterRepository>>,
    ) -> Result<Json<Vec<Party>>, ApplicationError> {
        let parties = poster_repo.list_parties().await?;
        Ok(Json(parties))
    }
}
