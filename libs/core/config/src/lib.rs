pub mod cors;
pub mod server;
pub mod tracing;

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },

    #[error("Failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// Load a `.env` file from the working directory or one of its parents.
///
/// Variables already present in the process environment are not overridden.
/// Returns the path that was loaded, or `None` when there is no `.env` file.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Load a specific env file. Existing process variables win.
pub fn load_dotenv_from(path: &Path) -> Result<(), ConfigError> {
    dotenvy::from_path(path)?;
    Ok(())
}

/// Application environment (dev = local, prod = deployed)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Static application identity reported by health endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Builds an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Helper to load environment variable or return error
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Helper to load an optional environment variable, treating blank values as unset
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Helper to parse an optional environment variable; blank or unset is `None`
pub fn env_parse_optional<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_optional(key)
        .map(|raw| {
            raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
                key: key.to_string(),
                details: e.to_string(),
            })
        })
        .transpose()
}

/// Helper to parse an environment variable, falling back to `default` when unset
pub fn env_parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(env_parse_optional(key)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_env_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("{}-{}.env", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_dotenv_from_sets_missing_vars() {
        let path = write_env_file("core-config-dotenv", "DOTENV_TEST_KEY=from-file\n");

        temp_env::with_var_unset("DOTENV_TEST_KEY", || {
            load_dotenv_from(&path).unwrap();
            assert_eq!(env_required("DOTENV_TEST_KEY").unwrap(), "from-file");
        });

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_dotenv_from_keeps_process_vars() {
        let path = write_env_file("core-config-dotenv-keep", "DOTENV_KEEP_KEY=from-file\n");

        temp_env::with_var("DOTENV_KEEP_KEY", Some("from-process"), || {
            load_dotenv_from(&path).unwrap();
            assert_eq!(env_required("DOTENV_KEEP_KEY").unwrap(), "from-process");
        });

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_dotenv_from_missing_file_is_error() {
        let missing = env::temp_dir().join("core-config-no-such-file.env");
        assert!(matches!(
            load_dotenv_from(&missing),
            Err(ConfigError::DotEnv(_))
        ));
    }

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        temp_env::with_var("APP_ENV", Some("PRODUCTION"), || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });

        temp_env::with_var("APP_ENV", Some("Production"), || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_app_info_macro_uses_crate_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_env_or_default() {
        temp_env::with_var("TEST_VAR", Some("test_value"), || {
            assert_eq!(env_or_default("TEST_VAR", "default"), "test_value");
        });
        temp_env::with_var_unset("MISSING_VAR", || {
            assert_eq!(env_or_default("MISSING_VAR", "default_value"), "default_value");
        });
    }

    #[test]
    fn test_env_required_missing() {
        temp_env::with_var_unset("MISSING_REQUIRED", || {
            let err = env_required("MISSING_REQUIRED").unwrap_err();
            assert!(err.to_string().contains("MISSING_REQUIRED"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_env_optional_treats_blank_as_unset() {
        temp_env::with_var("BLANK_VAR", Some("   "), || {
            assert_eq!(env_optional("BLANK_VAR"), None);
        });
        temp_env::with_var("SET_VAR", Some("value"), || {
            assert_eq!(env_optional("SET_VAR").as_deref(), Some("value"));
        });
    }

    #[test]
    fn test_env_parse_or() {
        temp_env::with_var_unset("PARSE_VAR", || {
            assert_eq!(env_parse_or("PARSE_VAR", 42u64).unwrap(), 42);
        });
        temp_env::with_var("PARSE_VAR", Some(" 7 "), || {
            assert_eq!(env_parse_or("PARSE_VAR", 42u64).unwrap(), 7);
        });
        temp_env::with_var("PARSE_VAR", Some("seven"), || {
            let err = env_parse_or("PARSE_VAR", 42u64).unwrap_err();
            assert!(err.to_string().contains("PARSE_VAR"));
        });
    }

    #[test]
    fn test_env_parse_optional() {
        temp_env::with_var("PARSE_OPT_VAR", Some("  "), || {
            assert_eq!(env_parse_optional::<u64>("PARSE_OPT_VAR").unwrap(), None);
        });
        temp_env::with_var("PARSE_OPT_VAR", Some(" 30 "), || {
            assert_eq!(env_parse_optional::<u64>("PARSE_OPT_VAR").unwrap(), Some(30));
        });
        temp_env::with_var("PARSE_OPT_VAR", Some("soon"), || {
            assert!(matches!(
                env_parse_optional::<u64>("PARSE_OPT_VAR"),
                Err(ConfigError::ParseError { key, .. }) if key == "PARSE_OPT_VAR"
            ));
        });
    }
}
