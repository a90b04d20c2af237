use chrono::NaiveDate;
use uuid::Uuid;

pub const UNKNOWN_IMAGE_FILENAME: &str = "unknown";

/// Poster fields as accepted for insertion; already trimmed and validated.
#[derive(Debug, Clone)]
pub struct NewPosterDTO {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub image_filename: String,
    pub party_id: Option<Uuid>,
    pub uploaded_by: Uuid,
    pub location: Option<String>,
    pub date_photographed: Option<NaiveDate>,
}
