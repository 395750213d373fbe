use crate::{ConfigError, FromEnv, env_optional};

/// Cross-origin configuration for browser clients.
///
/// `allowed_origins == None` means any origin is accepted and echoed back,
/// which keeps credentialed requests working from a local frontend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

impl CorsConfig {
    pub fn mirror_any() -> Self {
        Self {
            allowed_origins: None,
        }
    }

    pub fn with_origins<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: Some(origins.into_iter().map(Into::into).collect()),
        }
    }
}

impl FromEnv for CorsConfig {
    /// Reads `CORS_ALLOWED_ORIGIN` as a comma-separated list.
    fn from_env() -> Result<Self, ConfigError> {
        let Some(raw) = env_optional("CORS_ALLOWED_ORIGIN") else {
            return Ok(Self::mirror_any());
        };

        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "no origins listed".to_string(),
            });
        }

        Ok(Self::with_origins(origins))
    }
}
