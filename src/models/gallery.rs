use serde::Deserialize;
use serde_json::Value;

use super::record::{Collection, Media, MediaKind, Record};
use super::schema::GALLERY;
use crate::loader::LoadError;

/// One artwork entry from `gallery-data.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtItem {
    #[serde(default)]
    pub category: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_emoji: bool,
    #[serde(default)]
    pub downloadable: bool,
}

impl ArtItem {
    pub fn into_record(self) -> Record {
        let kind = if self.is_emoji {
            MediaKind::Emoji
        } else {
            MediaKind::Image
        };
        Record {
            category: self.category,
            title: GALLERY.fragment("title", self.title),
            content: vec![GALLERY.fragment("description", self.description)],
            media: self.image.map(|value| Media { kind, value }),
            downloadable: self.downloadable,
            ..Default::default()
        }
    }
}

fn section(doc: &Value, key: &str) -> Result<Collection, LoadError> {
    let items = doc
        .get(key)
        .ok_or_else(|| LoadError::Parse(format!("missing \"{}\" array", key)))?;
    let items: Vec<ArtItem> = serde_json::from_value(items.clone())
        .map_err(|e| LoadError::Parse(format!("{}: {}", key, e)))?;
    Ok(Collection::new(
        items.into_iter().map(ArtItem::into_record).collect(),
    ))
}

/// Returns `(official, fan)` collections. Both must parse.
pub fn collections(doc: &Value) -> Result<(Collection, Collection), LoadError> {
    Ok((section(doc, "officialArt")?, section(doc, "fanArt")?))
}
