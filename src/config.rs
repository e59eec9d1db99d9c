use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Where the places API lives. Resolved once, at build time for the browser
/// bundle, and handed to the gateway; nothing else reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Origin plus optional path prefix, e.g. `https://example.com/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Reads `PLACES_API_URL` from the build environment, falling back to the
    /// local development server.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("PLACES_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` (with or without a leading slash) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
