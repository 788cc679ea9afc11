use log::{info, warn};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "konstudio.toml";

/// Site configuration, read from `konstudio.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub news_source: String,
    pub gallery_source: String,
    pub fetch_timeout: Duration,
    /// `None` renders every feature item.
    pub news_feature_limit: Option<usize>,
    pub featured_feature_limit: Option<usize>,
    pub featured_year: i32,
    pub news_fallback: String,
    pub gallery_fallback: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            news_source: "DATA/news-data.json".to_string(),
            gallery_source: "DATA/gallery-data.json".to_string(),
            fetch_timeout: Duration::from_secs(30),
            news_feature_limit: None,
            featured_feature_limit: Some(3),
            featured_year: 2025,
            news_fallback: "Failed to load news. Please try again later.".to_string(),
            gallery_fallback: "Failed to load gallery. Please try again later.".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`. A missing or unreadable file gives the defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(s) => {
                info!("Using config {}", path.display());
                Self::from_toml_str(&s)
            }
            Err(_) => {
                info!("No config at {}, using defaults", path.display());
                Config::default()
            }
        }
    }

    pub fn from_toml_str(s: &str) -> Self {
        let val: toml::Value = match s.parse() {
            Ok(v) => v,
            Err(e) => {
                warn!("Invalid config, using defaults: {}", e);
                toml::Value::Table(Default::default())
            }
        };
        let d = Config::default();

        let str_or = |section: &str, key: &str, def: &str| -> String {
            val.get(section)
                .and_then(|t| t.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or(def)
                .to_string()
        };
        let int = |section: &str, key: &str| -> Option<i64> {
            val.get(section)
                .and_then(|t| t.get(key))
                .and_then(|v| v.as_integer())
        };
        // 0 means unbounded
        let limit = |section: &str, def: Option<usize>| -> Option<usize> {
            match int(section, "feature_limit") {
                Some(n) if n > 0 => Some(n as usize),
                Some(_) => None,
                None => def,
            }
        };

        Config {
            news_source: str_or("sources", "news", &d.news_source),
            gallery_source: str_or("sources", "gallery", &d.gallery_source),
            fetch_timeout: int("fetch", "timeout_secs")
                .filter(|n| *n > 0)
                .map(|n| Duration::from_secs(n as u64))
                .unwrap_or(d.fetch_timeout),
            news_feature_limit: limit("news", d.news_feature_limit),
            featured_feature_limit: limit("featured", d.featured_feature_limit),
            featured_year: int("featured", "year")
                .and_then(|y| i32::try_from(y).ok())
                .unwrap_or(d.featured_year),
            news_fallback: str_or("messages", "news_fallback", &d.news_fallback),
            gallery_fallback: str_or("messages", "gallery_fallback", &d.gallery_fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml_str(""), Config::default());
    }

    #[test]
    fn test_overrides() {
        let c = Config::from_toml_str(
            r#"
[sources]
news = "https://example.com/news.json"

[fetch]
timeout_secs = 5

[news]
feature_limit = 2

[featured]
feature_limit = 0
year = 2026
"#,
        );
        assert_eq!(c.news_source, "https://example.com/news.json");
        assert_eq!(c.gallery_source, "DATA/gallery-data.json");
        assert_eq!(c.fetch_timeout, Duration::from_secs(5));
        assert_eq!(c.news_feature_limit, Some(2));
        assert_eq!(c.featured_feature_limit, None);
        assert_eq!(c.featured_year, 2026);
    }

    #[test]
    fn test_out_of_range_year_falls_back() {
        let c = Config::from_toml_str("[featured]\nyear = 4294969321\n");
        assert_eq!(c.featured_year, Config::default().featured_year);
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        assert_eq!(Config::from_toml_str("[sources"), Config::default());
    }
}
