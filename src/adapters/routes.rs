use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::{
    controllers::{
        comment_controller::CommentController, health_controller::HealthController,
        media_controller::MediaController, poster_controller::PosterController,
        profile_controller::ProfileController, rating_controller::RatingController,
        upload_controller::{UploadController, UPLOAD_BODY_LIMIT},
    },
    middleware::require_session,
    state::AppState,
};

pub fn build_router(app_state: AppState) -> Router {
    let auth = middleware::from_fn_with_state(app_state.clone(), require_session);

    Router::new()
        .route("/api/health", get(HealthController::health_check))
        .route(
            "/api/upload",
            post(UploadController::upload)
                .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
                .route_layer(auth.clone()),
        )
        .route("/api/upload/precheck", post(UploadController::precheck))
        .route("/uploads/{*path}", get(MediaController::serve_upload))
        .route(
            "/api/posters",
            get(PosterController::list_posters)
                .merge(post(PosterController::create_poster).route_layer(auth.clone())),
        )
        .route("/api/posters/{poster_id}", get(PosterController::get_poster))
        .route("/api/parties", get(PosterController::list_parties))
        .route(
            "/api/comments",
            get(CommentController::list_comments)
                .merge(post(CommentController::create_comment).route_layer(auth.clone())),
        )
        .route(
            "/api/ratings",
            get(RatingController::rating_summary)
                .merge(post(RatingController::submit_rating).route_layer(auth.clone())),
        )
        .route(
            "/api/profile",
            get(ProfileController::get_profile)
                .put(ProfileController::update_profile)
                .route_layer(auth),
        )
        .with_state(app_state)
}
