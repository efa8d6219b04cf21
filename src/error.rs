use std::fmt;
use thiserror::Error;

/// Where an error came from. Empty fields are left out of the rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Parameter or config key, e.g. `width` or `cache.hasher_pool_size`.
    pub field: Option<String>,
    pub detail: Option<String>,
    /// Component that raised the error, e.g. `memory_cache`.
    pub component: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.field.is_none() && self.detail.is_none() && self.component.is_none()
    }
}

/// Renders as ` [component] field: detail`, or nothing when empty.
impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(component) = &self.component {
            write!(f, " [{}]", component)?;
        }
        match (&self.field, &self.detail) {
            (Some(field), Some(detail)) => write!(f, " {}: {}", field, detail),
            (Some(field), None) => write!(f, " {}", field),
            (None, Some(detail)) => write!(f, " {}", detail),
            (None, None) => Ok(()),
        }
    }
}

/// Unified error type for image retrieval and caching.
#[derive(Debug, Error)]
pub enum Error {
    /// The cache holds no image for the key.
    #[error("Cache miss: {key}")]
    CacheMiss { key: String },

    /// The cache backend failed for a reason other than a missing entry.
    #[error("Cache error: {message}{context}")]
    Cache {
        message: String,
        context: ErrorContext,
    },

    #[error("Provider error: {message}{context}")]
    Provider {
        message: String,
        context: ErrorContext,
    },

    #[error("Parameter error: {message}{context}")]
    Parameter {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub fn cache_miss(key: impl Into<String>) -> Self {
        Error::CacheMiss { key: key.into() }
    }

    /// Create a new cache backend error with structured context
    pub fn cache_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Cache {
            message: msg.into(),
            context,
        }
    }

    /// Create a new provider error with structured context
    pub fn provider_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Provider {
            message: msg.into(),
            context,
        }
    }

    /// Create a new parameter error with structured context
    pub fn parameter_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Parameter {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn is_cache_miss(&self) -> bool {
        matches!(self, Error::CacheMiss { .. })
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Cache { context, .. }
            | Error::Provider { context, .. }
            | Error::Parameter { context, .. }
            | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = Error::provider_with_context(
            "source not found",
            ErrorContext::new()
                .detail("/img/missing.png")
                .component("file_provider"),
        );
        assert_eq!(
            err.to_string(),
            "Provider error: source not found [file_provider] /img/missing.png"
        );

        let err = Error::parameter_with_context(
            "wrong type",
            ErrorContext::new().field("width").detail("expected integer"),
        );
        assert_eq!(
            err.to_string(),
            "Parameter error: wrong type width: expected integer"
        );
    }

    #[test]
    fn test_display_without_context() {
        let err = Error::cache_with_context("backend offline", ErrorContext::default());
        assert_eq!(err.to_string(), "Cache error: backend offline");
        assert!(err.context().is_some_and(ErrorContext::is_empty));
    }

    #[test]
    fn test_cache_miss() {
        let err = Error::cache_miss("abc");
        assert!(err.is_cache_miss());
        assert!(err.context().is_none());
        assert!(!Error::cache_with_context("x", ErrorContext::new()).is_cache_miss());
    }
}
