//! Router-level test harness: the real router, JWT session and local object
//! store, with in-memory catalog repositories.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderName, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

use crate::{
    adapters::{routes::build_router, state::AppState},
    application::{
        dto::{poster_dto::NewPosterDTO, profile_dto::ProfileDTO},
        error::ApplicationError,
        repositories::{
            comment_repository::CommentRepository, poster_repository::PosterRepository,
            profile_repository::ProfileRepository, rating_repository::RatingRepository,
        },
    },
    domain::{
        config::settings::{Provider, Settings},
        models::{
            comment::{Comment, CommentAuthor, ANONYMOUS_AUTHOR_NAME},
            party::Party,
            poster::{Poster, PosterListing, Uploader},
            profile::Profile,
            rating::Rating,
            session::SessionUser,
        },
    },
    services::{test_tokens, JwtAuthSession, LocalObjectStore},
};

#[derive(Default)]
pub struct InMemoryPosterRepository {
    posters: Mutex<Vec<Poster>>,
    parties: Mutex<Vec<Party>>,
}

impl InMemoryPosterRepository {
    pub fn add_party(&self, name: &str, color_hex: Option<&str>) -> Uuid {
        let id = Uuid::new_v4();
        self.parties.lock().unwrap().push(Party {
            id,
            name: name.to_string(),
            color_hex: color_hex.map(String::from),
        });
        id
    }

    fn listing(&self, poster: Poster) -> PosterListing {
        let party = poster.party_id.and_then(|party_id| {
            self.parties
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == party_id)
                .cloned()
        });
        PosterListing {
            uploader: Uploader {
                id: poster.uploaded_by,
                full_name: None,
            },
            party,
            poster,
        }
    }
}

#[async_trait]
impl PosterRepository for InMemoryPosterRepository {
    async fn create_poster(&self, poster: NewPosterDTO) -> Result<Poster, ApplicationError> {
        let created = Poster {
            id: Uuid::new_v4(),
            title: poster.title,
            description: poster.description,
            image_url: poster.image_url,
            image_filename: poster.image_filename,
            party_id: poster.party_id,
            uploaded_by: poster.uploaded_by,
            location: poster.location,
            date_photographed: poster.date_photographed,
            created_at: Utc::now(),
        };
        self.posters.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn get_poster(&self, poster_id: Uuid) -> Result<PosterListing, ApplicationError> {
        let poster = self
            .posters
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == poster_id)
            .cloned()
            .ok_or(ApplicationError::NotFound)?;
        Ok(self.listing(poster))
    }

    async fn list_posters(&self) -> Result<Vec<PosterListing>, ApplicationError> {
        let posters: Vec<Poster> = self.posters.lock().unwrap().iter().rev().cloned().collect();
        Ok(posters.into_iter().map(|p| self.listing(p)).collect())
    }

    async fn list_parties(&self) -> Result<Vec<Party>, ApplicationError> {
        let mut parties = self.parties.lock().unwrap().clone();
        parties.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(parties)
    }
}

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create_comment(
        &self,
        poster_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<Comment, ApplicationError> {
        let comment = Comment {
            id: Uuid::new_v4(),
            poster_id,
            user_id,
            content: content.to_string(),
            created_at: Utc::now(),
            profile: CommentAuthor {
                id: user_id,
                full_name: ANONYMOUS_AUTHOR_NAME.to_string(),
            },
        };
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn list_comments(&self, poster_id: Uuid) -> Result<Vec<Comment>, ApplicationError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|c| c.poster_id == poster_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryRatingRepository {
    ratings: Mutex<Vec<Rating>>,
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn upsert_rating(
        &self,
        poster_id: Uuid,
        user_id: Uuid,
        rating: i32,
    ) -> Result<Rating, ApplicationError> {
        let mut ratings = self.ratings.lock().unwrap();
        if let Some(existing) = ratings
            .iter_mut()
            .find(|r| r.poster_id == poster_id && r.user_id == user_id)
        {
            existing.rating = rating;
            return Ok(existing.clone());
        }
        let created = Rating {
            id: Uuid::new_v4(),
            poster_id,
            user_id,
            rating,
            created_at: Utc::now(),
        };
        ratings.push(created.clone());
        Ok(created)
    }

    async fn get_ratings(&self, poster_id: Uuid) -> Result<Vec<Rating>, ApplicationError> {
        Ok(self
            .ratings
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.poster_id == poster_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<HashMap<Uuid, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn insert(&self, id: Uuid, full_name: &str) {
        let now = Utc::now();
        self.profiles.lock().unwrap().insert(
            id,
            Profile {
                id,
                email: "existing@example.cz".to_string(),
                full_name: Some(full_name.to_string()),
                avatar_url: None,
                created_at: now,
                updated_at: now,
            },
        );
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.profiles.lock().unwrap().contains_key(&id)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_profile(&self, user_id: Uuid) -> Result<Profile, ApplicationError> {
        self.profiles
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .ok_or(ApplicationError::NotFound)
    }

    async fn ensure_profile(&self, user: &SessionUser) -> Result<(), ApplicationError> {
        let now = Utc::now();
        self.profiles
            .lock()
            .unwrap()
            .entry(user.id)
            .or_insert_with(|| Profile {
                id: user.id,
                email: user.profile_email().to_string(),
                full_name: Some(user.profile_name().to_string()),
                avatar_url: user.avatar_url.clone(),
                created_at: now,
                updated_at: now,
            });
        Ok(())
    }

    async fn update_profile(&self, profile: ProfileDTO) -> Result<Profile, ApplicationError> {
        let mut profiles = self.profiles.lock().unwrap();
        let existing = profiles
            .get_mut(&profile.id)
            .ok_or(ApplicationError::NotFound)?;
        if let Some(full_name) = profile.full_name {
            existing.full_name = Some(full_name);
        }
        if let Some(avatar_url) = profile.avatar_url {
            existing.avatar_url = Some(avatar_url);
        }
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }
}

pub struct TestApp {
    pub router: Router,
    pub posters: Arc<InMemoryPosterRepository>,
    pub profiles: Arc<InMemoryProfileRepository>,
    dir: TempDir,
}

impl TestApp {
    fn uploads_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("uploads")
    }

    pub fn write_upload(&self, name: &str, content: &[u8]) {
        std::fs::write(self.uploads_dir().join(name), content).unwrap();
    }

    pub fn write_outside_root(&self, name: &str, content: &[u8]) {
        std::fs::write(self.dir.path().join(name), content).unwrap();
    }

    pub fn stored_object_count(&self) -> usize {
        count_files(&self.uploads_dir())
    }
}

fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(Result::ok).count())
        .unwrap_or(0)
}

pub async fn test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let uploads_dir = dir.path().join("uploads");

    let settings = Settings {
        port: 0,
        database_url: "postgres://unused".to_string(),
        jwt_secret: test_tokens::TEST_SECRET.to_string(),
        uploads_dir: uploads_dir.clone(),
        provider: Provider::Local,
        supabase: None,
        cors_allowed_origins: None,
    };

    let posters = Arc::new(InMemoryPosterRepository::default());
    let profiles = Arc::new(InMemoryProfileRepository::default());

    let app_state = AppState {
        auth_session: Arc::new(JwtAuthSession::new(&settings.jwt_secret)),
        object_store: Arc::new(LocalObjectStore::new(&uploads_dir).await.unwrap()),
        poster_repository: posters.clone(),
        comment_repository: Arc::new(InMemoryCommentRepository::default()),
        rating_repository: Arc::new(InMemoryRatingRepository::default()),
        profile_repository: profiles.clone(),
    };

    TestApp {
        router: build_router(app_state),
        posters,
        profiles,
        dir,
    }
}

pub fn bearer(user_id: Uuid) -> String {
    format!("Bearer {}", test_tokens::token_for(user_id))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn header(&self, name: HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, token)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub enum FormPart<'a> {
    Text {
        name: &'a str,
        value: &'a str,
    },
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        content: &'a [u8],
    },
}

impl<'a> FormPart<'a> {
    pub fn text(name: &'a str, value: &'a str) -> Self {
        FormPart::Text { name, value }
    }

    pub fn file(name: &'a str, filename: &'a str, content_type: &'a str, content: &'a [u8]) -> Self {
        FormPart::File {
            name,
            filename,
            content_type,
            content,
        }
    }
}

const BOUNDARY: &str = "----poster-board-test-boundary";

/// Encodes `multipart/form-data`; returns the content type header and body.
pub fn multipart_body(parts: &[FormPart<'_>]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            FormPart::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            FormPart::File {
                name,
                filename,
                content_type,
                content,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name, filename, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(content);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    (format!("multipart/form-data; boundary={}", BOUNDARY), body)
}
