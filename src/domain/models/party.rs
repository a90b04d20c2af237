use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "colorHex")]
    pub color_hex: Option<String>,
}
