use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::party::Party;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poster {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "imageFilename")]
    pub image_filename: String,
    #[serde(rename = "partyId")]
    pub party_id: Option<Uuid>,
    #[serde(rename = "uploadedBy")]
    pub uploaded_by: Uuid,
    pub location: Option<String>,
    #[serde(rename = "datePhotographed")]
    pub date_photographed: Option<NaiveDate>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Uploader {
    pub id: Uuid,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
}

/// A poster as shown in the gallery, with its party and uploader resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosterListing {
    #[serde(flatten)]
    pub poster: Poster,
    pub party: Option<Party>,
    pub uploader: Uploader,
}
