use serde::Deserialize;
use serde_json::Value;

use super::record::{Collection, Features, Media, MediaKind, Record, RecordDate};
use super::schema::NEWS;
use crate::loader::LoadError;

#[derive(Debug, Clone, Deserialize)]
pub struct NewsDate {
    pub day: Value,
    pub month: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsFeatures {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One entry of the `news` array as it appears in `news-data.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(default)]
    pub category: Option<String>,
    pub title: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub date: Option<NewsDate>,
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub features: Option<NewsFeatures>,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
}

impl NewsItem {
    pub fn into_record(self) -> Record {
        Record {
            category: self.category,
            title: NEWS.fragment("title", self.title),
            content: self
                .content
                .into_iter()
                .map(|p| NEWS.fragment("content", p))
                .collect(),
            media: self
                .featured_image
                .filter(|s| !s.is_empty())
                .map(|value| Media {
                    kind: MediaKind::Image,
                    value,
                }),
            tag: self.tag.map(|t| NEWS.fragment("tag", t)),
            date: self.date.map(|d| RecordDate {
                day: day_string(&d.day),
                month: d.month,
            }),
            features: self.features.map(|f| Features {
                title: f.title.map(|t| NEWS.fragment("features.title", t)),
                items: f
                    .items
                    .into_iter()
                    .map(|i| NEWS.fragment("features.items", i))
                    .collect(),
            }),
            footer: self.footer.map(|f| NEWS.fragment("footer", f)),
            downloadable: false,
        }
    }
}

/// Days show up both as `"05"` and `5` in hand-edited data files.
fn day_string(day: &Value) -> String {
    match day {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Extract the news collection from a loaded document.
/// Any record that doesn't match the schema fails the whole collection.
pub fn collection(doc: &Value) -> Result<Collection, LoadError> {
    let items = doc
        .get("news")
        .ok_or_else(|| LoadError::Parse("missing \"news\" array".into()))?;
    let items: Vec<NewsItem> = serde_json::from_value(items.clone())
        .map_err(|e| LoadError::Parse(format!("news: {}", e)))?;
    Ok(Collection::new(
        items.into_iter().map(NewsItem::into_record).collect(),
    ))
}
