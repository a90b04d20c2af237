use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::{info, warn};

use crate::{
    adapters::dto::upload_dto::{PrecheckRequest, UploadResponse},
    application::{error::ApplicationError, services::ObjectStore},
    domain::{
        models::{file::UploadCandidate, session::SessionUser},
        upload::{
            derive_storage_filename, validate_client_side, UploadContext, ValidationOutcome,
            MAX_FILE_SIZE,
        },
    },
};

/// Body limit for the upload route. Twice the largest accepted file, so a file
/// slightly over the limit still reaches the validator and gets FILE_TOO_LARGE.
pub const UPLOAD_BODY_LIMIT: usize = 2 * MAX_FILE_SIZE as usize + 64 * 1024;

fn multipart_error(e: MultipartError, what: &str) -> ApplicationError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApplicationError::PayloadTooLarge;
    }
    warn!("Invalid {}: {}", what, e);
    ApplicationError::BadRequest("Invalid request format".to_string())
}

pub struct UploadController;

impl UploadController {
    /// POST /api/upload
    /// Multipart: `file` (binary), `type` ("poster" | "avatar", default "poster")
    pub async fn upload(
        State(object_store): State<Arc<dyn ObjectStore>>,
        Extension(user): Extension<SessionUser>,
        mut multipart: Multipart,
    ) -> Result<(StatusCode, Json<UploadResponse>), ApplicationError> {
        let mut candidate: Option<UploadCandidate> = None;
        let mut upload_type: Option<String> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, "multipart data"))?
        {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "file" => {
                    let declared_filename = field.file_name().unwrap_or("").to_string();
                    let declared_mime_type = field.content_type().unwrap_or("").to_string();
                    let content = field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error(e, "file bytes"))?
                        .to_vec();

                    candidate = Some(UploadCandidate::new(
                        content,
                        declared_filename,
                        declared_mime_type,
                    ));
                }
                "type" => {
                    upload_type = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| multipart_error(e, "type field"))?,
                    );
                }
                _ => {}
            }
        }

        let candidate = candidate.ok_or_else(|| {
            warn!("Missing required 'file' field in upload");
            ApplicationError::BadRequest("No file provided".to_string())
        })?;

        let context = upload_type
            .as_deref()
            .map(str::parse::<UploadContext>)
            .transpose()
            .map_err(|e| ApplicationError::BadRequest(e.to_string()))?
            .unwrap_or_default();

        candidate.validate(context).into_result().map_err(|code| {
            warn!(
                "Rejected {} upload from {}: {} (name='{}', type='{}', size={})",
                context,
                user.id,
                code,
                candidate.declared_filename,
                candidate.declared_mime_type,
                candidate.byte_size()
            );
            ApplicationError::Validation(code)
        })?;

        let filename =
            derive_storage_filename(&candidate.declared_filename, &user.id.to_string(), context);

        let stored = object_store
            .put(&filename, candidate.content, &candidate.declared_mime_type)
            .await?;

        info!(
            "Accepted {} upload from {} as '{}' ({} bytes, {})",
            context, user.id, stored.key, stored.size, stored.provider
        );

        Ok((StatusCode::CREATED, Json(UploadResponse::from(stored))))
    }

    /// POST /api/upload/precheck
    /// Metadata-only check the browser runs before sending any bytes.
    pub async fn precheck(Json(body): Json<PrecheckRequest>) -> Json<ValidationOutcome> {
        Json(validate_client_side(&body.filename, &body.mime_type, body.size))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::adapters::test_support::*;

    fn jpeg_content(size: usize) -> Vec<u8> {
        let mut content = vec![0xFF, 0xD8, 0xFF, 0xE0];
        content.resize(size, 0x11);
        content
    }

    fn upload_request(token: Option<&str>, parts: &[FormPart]) -> Request<Body> {
        let (content_type, body) = multipart_body(parts);
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri("/api/upload")
            .header(header::CONTENT_TYPE, content_type);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_poster_and_serves_it_back() {
        let app = test_app().await;
        let user_id = Uuid::new_v4();
        let content = jpeg_content(100_000);

        let response = send(
            &app.router,
            upload_request(
                Some(&bearer(user_id)),
                &[FormPart::file("file", "Photo.JPG", "image/jpeg", &content)],
            ),
        )
        .await;

        assert_eq!(response.status, StatusCode::CREATED);
        let body = response.json();
        let filename = body["filename"].as_str().unwrap().to_string();
        assert!(filename.starts_with("poster-"));
        assert!(filename.ends_with(&format!("-{}.jpg", user_id)));
        assert_eq!(body["url"], format!("/uploads/{}", filename));
        assert_eq!(body["size"], 100_000);
        assert_eq!(body["type"], "image/jpeg");

        let served = send(&app.router, get(&format!("/uploads/{}", filename))).await;
        assert_eq!(served.status, StatusCode::OK);
        assert_eq!(served.header(header::CONTENT_TYPE), Some("image/jpeg"));
        assert_eq!(served.body, content);
    }

    #[tokio::test]
    async fn avatar_type_selects_avatar_prefix() {
        let app = test_app().await;
        let mut png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        png.resize(60_000, 0);

        let response = send(
            &app.router,
            upload_request(
                Some(&bearer(Uuid::new_v4())),
                &[
                    FormPart::text("type", "avatar"),
                    FormPart::file("file", "me.png", "image/png", &png),
                ],
            ),
        )
        .await;

        assert_eq!(response.status, StatusCode::CREATED);
        assert!(response.json()["filename"]
            .as_str()
            .unwrap()
            .starts_with("avatar-"));
    }

    #[tokio::test]
    async fn spoofed_content_is_rejected_and_not_stored() {
        let app = test_app().await;
        let mut script = b"<script>alert(document.cookie)</script>".to_vec();
        script.resize(80_000, b' ');

        let response = send(
            &app.router,
            upload_request(
                Some(&bearer(Uuid::new_v4())),
                &[FormPart::file("file", "poster.jpg", "image/jpeg", &script)],
            ),
        )
        .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let body = response.json();
        assert_eq!(body["error"], "CONTENT_MISMATCH");
        assert!(body["message"].as_str().unwrap().len() > 10);
        assert_eq!(app.stored_object_count(), 0);
    }

    #[tokio::test]
    async fn svg_is_rejected_by_extension() {
        let app = test_app().await;
        let mut svg = b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>".to_vec();
        svg.resize(60_000, b' ');

        let response = send(
            &app.router,
            upload_request(
                Some(&bearer(Uuid::new_v4())),
                &[FormPart::file("file", "poster.svg", "image/svg+xml", &svg)],
            ),
        )
        .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["error"], "INVALID_EXTENSION");
    }

    #[tokio::test]
    async fn small_file_is_rejected() {
        let app = test_app().await;
        let response = send(
            &app.router,
            upload_request(
                Some(&bearer(Uuid::new_v4())),
                &[FormPart::file("file", "tiny.jpg", "image/jpeg", &jpeg_content(1024))],
            ),
        )
        .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["error"], "FILE_TOO_SMALL");
    }

    #[tokio::test]
    async fn file_just_over_limit_reaches_validator() {
        let app = test_app().await;
        let response = send(
            &app.router,
            upload_request(
                Some(&bearer(Uuid::new_v4())),
                &[FormPart::file(
                    "file",
                    "huge.jpg",
                    "image/jpeg",
                    &jpeg_content(10 * 1024 * 1024 + 1),
                )],
            ),
        )
        .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["error"], "FILE_TOO_LARGE");
    }

    #[tokio::test]
    async fn requires_session() {
        let app = test_app().await;
        let response = send(
            &app.router,
            upload_request(
                None,
                &[FormPart::file("file", "a.jpg", "image/jpeg", &jpeg_content(60_000))],
            ),
        )
        .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);

        let response = send(
            &app.router,
            upload_request(
                Some("Bearer forged"),
                &[FormPart::file("file", "a.jpg", "image/jpeg", &jpeg_content(60_000))],
            ),
        )
        .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_file_and_unknown_type_are_bad_requests() {
        let app = test_app().await;
        let token = bearer(Uuid::new_v4());

        let response = send(
            &app.router,
            upload_request(Some(&token), &[FormPart::text("type", "poster")]),
        )
        .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);

        let response = send(
            &app.router,
            upload_request(
                Some(&token),
                &[
                    FormPart::text("type", "banner"),
                    FormPart::file("file", "a.jpg", "image/jpeg", &jpeg_content(60_000)),
                ],
            ),
        )
        .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(app.stored_object_count(), 0);
    }

    #[tokio::test]
    async fn precheck_reports_outcome_without_bytes() {
        let app = test_app().await;

        let response = send(
            &app.router,
            post_json(
                "/api/upload/precheck",
                None,
                json!({ "filename": "plakat.webp", "mimeType": "image/webp", "size": 200000 }),
            ),
        )
        .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json(), json!({ "isValid": true }));

        let response = send(
            &app.router,
            post_json(
                "/api/upload/precheck",
                None,
                json!({ "filename": "plakat", "mimeType": "image/webp", "size": 200000 }),
            ),
        )
        .await;
        let body: Value = response.json();
        assert_eq!(body["isValid"], false);
        assert_eq!(body["errorCode"], "NO_EXTENSION");
        assert!(body["errorMessage"].is_string());
    }
}
