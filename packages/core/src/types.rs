use serde::{Deserialize, Serialize};

use crate::letter::Letter;

/// Stored association of a letter to a display word and an image reference.
///
/// Field names follow the lookup service's wire format (`_id`, `imageUrl`).
/// Records are read-only from the application's point of view; they only
/// change when the seeding tool replaces the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub letter: Letter,
    pub word: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
