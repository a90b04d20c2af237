use axum::extract::FromRef;
use std::sync::Arc;

use crate::application::{
    repositories::{
        comment_repository::CommentRepository, poster_repository::PosterRepository,
        profile_repository::ProfileRepository, rating_repository::RatingRepository,
    },
    services::{AuthSession, ObjectStore},
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub auth_session: Arc<dyn AuthSession>,
    pub object_store: Arc<dyn ObjectStore>,
    pub poster_repository: Arc<dyn PosterRepository>,
    pub comment_repository: Arc<dyn CommentRepository>,
    pub rating_repository: Arc<dyn RatingRepository>,
    pub profile_repository: Arc<dyn ProfileRepository>,
}
