use async_trait::async_trait;
use sqlx::{query, query_as, QueryBuilder};
use uuid::Uuid;

use crate::{
    application::{
        dto::profile_dto::ProfileDTO, error::ApplicationError,
        repositories::profile_repository::ProfileRepository,
    },
    domain::models::{profile::Profile, session::SessionUser},
};

pub struct PgProfileRepository {
    pool: sqlx::PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn get_profile(&self, user_id: Uuid) -> Result<Profile, ApplicationError> {
        let query = "SELECT * FROM profiles WHERE id = $1";

        query_as::<_, Profile>(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?
            .ok_or(ApplicationError::NotFound)
    }

    async fn ensure_profile(&self, user: &SessionUser) -> Result<(), ApplicationError> {
        let statement = r#"
            INSERT INTO profiles (id, email, full_name, avatar_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
        "#;

        query(statement)
            .bind(user.id)
            .bind(user.profile_email())
            .bind(user.profile_name())
            .bind(&user.avatar_url)
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn update_profile(&self, profile: ProfileDTO) -> Result<Profile, ApplicationError> {
        if profile.is_empty() {
            return self.get_profile(profile.id).await;
        }

        let mut builder = QueryBuilder::new("UPDATE profiles SET ");
        let mut separated = builder.separated(", ");
        if let Some(full_name) = &profile.full_name {
            separated.push("full_name = ");
            separated.push_bind_unseparated(full_name);
        }
        if let Some(avatar_url) = &profile.avatar_url {
            separated.push("avatar_url = ");
            separated.push_bind_unseparated(avatar_url);
        }
        separated.push("updated_at = NOW()");
        builder.push(" WHERE id = ");
        builder.push_bind(profile.id);
        builder.push(" RETURNING *");

        builder
            .build_query_as::<Profile>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?
            .ok_or(ApplicationError::NotFound)
    }
}
