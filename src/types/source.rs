//! Image source locator.

use crate::{Error, ErrorContext, Result};
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Identifies what to retrieve.
///
/// The caching layer never looks inside a source; it only relies on the
/// [`Display`](fmt::Display) rendering being stable for equal values and
/// distinct for distinct ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(Url),
    Raw(String),
    /// Rendered as compact JSON with object keys sorted.
    Structured(serde_json::Value),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Non UTF-8 paths use the escaped debug form, which keeps every byte.
            Source::Path(path) => match path.to_str() {
                Some(s) => f.write_str(s),
                None => write!(f, "{:?}", path.as_os_str()),
            },
            Source::Url(url) => write!(f, "{}", url),
            Source::Raw(raw) => f.write_str(raw),
            Source::Structured(value) => write!(f, "{}", value),
        }
    }
}

impl Source {
    /// Parse an absolute URL. The stored form is normalized, so
    /// `"HTTP://Example.COM"` and `"http://example.com/"` are the same source.
    pub fn parse_url(s: &str) -> Result<Self> {
        Url::parse(s).map(Source::Url).map_err(|e| {
            Error::parameter_with_context(
                "invalid source URL",
                ErrorContext::new()
                    .field("source")
                    .detail(format!("{}: {}", s, e)),
            )
        })
    }
}

/// Strings are kept verbatim, URL-shaped or not.
impl From<&str> for Source {
    fn from(s: &str) -> Self {
        Source::Raw(s.to_string())
    }
}

impl From<String> for Source {
    fn from(s: String) -> Self {
        Source::Raw(s)
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl From<Url> for Source {
    fn from(url: Url) -> Self {
        Source::Url(url)
    }
}

impl From<serde_json::Value> for Source {
    fn from(value: serde_json::Value) -> Self {
        Source::Structured(value)
    }
}
