use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One catalog entry.
///
/// Items are owned by the catalog and never mutated by the engine. The
/// `sensitive` flag is gated behind the viewer-discretion toggle by the
/// presentation layer; the engine itself never filters on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    /// Year the piece was produced.
    pub date: i32,
    /// Free-form media description, e.g. "Video" or "Oil on canvas".
    pub media: String,
    #[serde(default)]
    pub sensitive: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, date: i32, media: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date,
            media: media.into(),
            sensitive: false,
        }
    }
}
