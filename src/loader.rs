use log::{debug, info};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// The two ways loading a data document can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Network/transport failure, non-success status, unreadable file.
    Fetch(String),
    /// Malformed JSON or a document that doesn't match the expected shape.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Fetch(msg) => write!(f, "fetch error: {}", msg),
            LoadError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

/// Where a data document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(url::Url),
    File(PathBuf),
}

impl Source {
    /// `http(s)://` is remote, `file://` and bare paths are local.
    pub fn parse(raw: &str) -> Self {
        if let Ok(u) = url::Url::parse(raw) {
            match u.scheme() {
                "http" | "https" => return Source::Url(u),
                "file" => {
                    if let Ok(p) = u.to_file_path() {
                        return Source::File(p);
                    }
                }
                _ => {}
            }
        }
        Source::File(PathBuf::from(raw))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(u) => write!(f, "{}", u),
            Source::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Fetch and parse a JSON document. One request, no retry.
pub fn load(source: &Source, timeout: Duration) -> Result<Value, LoadError> {
    info!("Loading {}", source);
    let body = match source {
        Source::Url(u) => fetch_url(u, timeout)?,
        Source::File(p) => std::fs::read_to_string(p)
            .map_err(|e| LoadError::Fetch(format!("{}: {}", p.display(), e)))?,
    };
    debug!("Fetched {} bytes from {}", body.len(), source);
    parse(&body)
}

pub fn parse(body: &str) -> Result<Value, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))
}

fn fetch_url(u: &url::Url, timeout: Duration) -> Result<String, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LoadError::Fetch(format!("HTTP client error: {}", e)))?;

    let resp = client
        .get(u.as_str())
        .header("Accept", "application/json")
        .send()
        .map_err(|e| LoadError::Fetch(format!("request failed: {}", e)))?;

    if !resp.status().is_success() {
        return Err(LoadError::Fetch(format!("{} returned {}", u, resp.status())));
    }

    resp.text()
        .map_err(|e| LoadError::Fetch(format!("reading body failed: {}", e)))
}
