mod adapters;
mod application;
mod domain;
mod services;

use std::sync::Arc;

use adapters::{
    repositories::{
        PgCommentRepository, PgPosterRepository, PgProfileRepository, PgRatingRepository,
    },
    routes::build_router,
    state::AppState,
};
use application::{
    repositories::{
        comment_repository::CommentRepository, poster_repository::PosterRepository,
        profile_repository::ProfileRepository, rating_repository::RatingRepository,
    },
    services::AuthSession,
};
use domain::config::settings::Settings;
use services::JwtAuthSession;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env().expect("ERROR: Invalid configuration");

    tracing::info!(
        "Starting poster-board-service with {} storage",
        settings.provider.as_str()
    );

    let cors = match &settings.cors_allowed_origins {
        Some(allowed_origins) => {
            let origins: Vec<_> = allowed_origins
                .iter()
                .map(|s| s.parse().expect("Invalid CORS origin"))
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        // Development only
        None => CorsLayer::permissive(),
    };

    tracing::info!("Connecting to database...");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&settings.database_url)
        .await
        .expect("ERROR: Failed to connect to PostgreSQL database. Check DATABASE_URL and network connectivity.");
    tracing::info!("Database connection established");

    let object_store = services::create_object_store(&settings)
        .await
        .expect("Failed to create object store");

    let app_state = AppState {
        auth_session: Arc::new(JwtAuthSession::new(&settings.jwt_secret)) as Arc<dyn AuthSession>,
        object_store,
        poster_repository: Arc::new(PgPosterRepository::new(pool.clone()))
            as Arc<dyn PosterRepository>,
        comment_repository: Arc::new(PgCommentRepository::new(pool.clone()))
            as Arc<dyn CommentRepository>,
        rating_repository: Arc::new(PgRatingRepository::new(pool.clone()))
            as Arc<dyn RatingRepository>,
        profile_repository: Arc::new(PgProfileRepository::new(pool)) as Arc<dyn ProfileRepository>,
    };

    let router = build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", settings.port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", settings.port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
