use async_trait::async_trait;
use sqlx::query_as;
use uuid::Uuid;

use crate::{
    application::{
        dto::poster_dto::NewPosterDTO, error::ApplicationError,
        repositories::poster_repository::PosterRepository,
    },
    domain::models::{
        party::Party,
        poster::{Poster, PosterListing},
    },
};

const LISTING_SELECT: &str = r#"
    SELECT p.*,
           pa.name AS party_name,
           pa.color_hex AS party_color_hex,
           pr.full_name AS uploader_full_name
    FROM posters p
    LEFT JOIN political_parties pa ON pa.id = p.party_id
    LEFT JOIN profiles pr ON pr.id = p.uploaded_by
"#;

pub struct PgPosterRepository {
    pool: sqlx::PgPool,
}

impl PgPosterRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PosterRepository for PgPosterRepository {
    async fn create_poster(&self, poster: NewPosterDTO) -> Result<Poster, ApplicationError> {
        let query = r#"
            INSERT INTO posters (
                title, description, image_url, image_filename, party_id,
                uploaded_by, location, date_photographed
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
        "#;

        let created = query_as::<_, Poster>(query)
            .bind(&poster.title)
            .bind(&poster.description)
            .bind(&poster.image_url)
            .bind(&poster.image_filename)
            .bind(poster.party_id)
            .bind(poster.uploaded_by)
            .bind(&poster.location)
            .bind(poster.date_photographed)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(created)
    }

    async fn get_poster(&self, poster_id: Uuid) -> Result<PosterListing, ApplicationError> {
        let query = format!("{} WHERE p.id = $1", LISTING_SELECT);

        query_as::<_, PosterListing>(&query)
            .bind(poster_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?
            .ok_or(ApplicationError::NotFound)
    }

    async fn list_posters(&self) -> Result<Vec<PosterListing>, ApplicationError> {
        let query = format!("{} ORDER BY p.created_at DESC", LISTING_SELECT);

        query_as::<_, PosterListing>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))
    }

    async fn list_parties(&self) -> Result<Vec<Party>, ApplicationError> {
        let query = "SELECT id, name, color_hex FROM political_parties ORDER BY name";

        query_as::<_, Party>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))
    }
}
