use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};
use uuid::Uuid;

use crate::domain::models::{
    party::Party,
    poster::{Poster, PosterListing, Uploader},
};

#[derive(Debug, Deserialize)]
pub struct CreatePosterRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub filename: Option<String>,
    #[serde(rename = "partyId")]
    pub party_id: Option<Uuid>,
    pub location: Option<String>,
    #[serde(rename = "datePhotographed")]
    pub date_photographed: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct PosterResponse {
    pub poster: Poster,
}

impl FromRow<'_, PgRow> for Poster {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Poster {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            image_url: row.try_get("image_url")?,
            image_filename: row.try_get("image_filename")?,
            party_id: row.try_get("party_id")?,
            uploaded_by: row.try_get("uploaded_by")?,
            location: row.try_get("location")?,
            date_photographed: row.try_get("date_photographed")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl FromRow<'_, PgRow> for Party {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Party {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            color_hex: row.try_get("color_hex")?,
        })
    }
}

/// Expects the poster columns plus `party_name`, `party_color_hex` and
/// `uploader_full_name` from the left joins.
impl FromRow<'_, PgRow> for PosterListing {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let poster = Poster::from_row(row)?;
        let party_name: Option<String> = row.try_get("party_name")?;
        let party = match (poster.party_id, party_name) {
            (Some(id), Some(name)) => Some(Party {
                id,
                name,
                color_hex: row.try_get("party_color_hex")?,
            }),
            _ => None,
        };
        Ok(PosterListing {
            uploader: Uploader {
                id: poster.uploaded_by,
                full_name: row.try_get("uploader_full_name")?,
            },
            party,
            poster,
        })
    }
}

/// Trims the value and turns blank strings into `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
