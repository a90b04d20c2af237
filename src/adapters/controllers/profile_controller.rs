use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use tracing::info;

use crate::{
    adapters::dto::{
        poster_dto::non_blank,
        profile_dto::{UpdateProfileRequest, UpdateProfileResponse},
    },
    application::{
        dto::profile_dto::ProfileDTO, error::ApplicationError,
        repositories::profile_repository::ProfileRepository,
    },
    domain::models::{profile::Profile, session::SessionUser},
};

pub struct ProfileController;

impl ProfileController {
    /// GET /api/profile
    pub async fn get_profile(
        State(profile_repo): State<Arc<dyn ProfileRepository>>,
        Extension(user): Extension<SessionUser>,
    ) -> Result<Json<Profile>, ApplicationError> {
        let profile = profile_repo.get_profile(user.id).await?;
        Ok(Json(profile))
    }

    /// PUT /api/profile
    pub async fn update_profile(
        State(profile_repo): State<Arc<dyn ProfileRepository>>,
        Extension(user): Extension<SessionUser>,
        Json(body): Json<UpdateProfileRequest>,
    ) -> Result<Json<UpdateProfileResponse>, ApplicationError> {
        profile_repo.ensure_profile(&user).await?;

        let mut update_dto = ProfileDTO::for_update(user.id);
        update_dto.full_name = non_blank(body.full_name);
        update_dto.avatar_url = non_blank(body.avatar_url);

        let profile = profile_repo.update_profile(update_dto).await?;
        info!("Profile {} updated", user.id);

        Ok(Json(UpdateProfileResponse {
            success: true,
            profile,
        }))
    }
}
